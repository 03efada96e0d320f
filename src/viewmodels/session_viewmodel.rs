// ============================================================================
// SESSION VIEWMODEL - Mostrar u ocultar los formularios según la sesión
// ============================================================================

use crate::models::LoginStatus;
use crate::services::ApiClient;
use crate::utils::constants::LOGIN_PAGE;
use crate::views::login_gate::apply_gate;

/// Visibilidad CSS de los formularios de reseñas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_css(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Qué hacer con la página para un estado de sesión dado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub forms: Visibility,
    pub redirect: Option<&'static str>,
}

impl GateDecision {
    pub fn for_status(status: LoginStatus) -> Self {
        match status {
            LoginStatus::LoggedIn => Self {
                forms: Visibility::Visible,
                redirect: None,
            },
            LoginStatus::LoggedOut => Self {
                forms: Visibility::Hidden,
                redirect: Some(LOGIN_PAGE),
            },
        }
    }
}

pub struct SessionViewModel {
    api: ApiClient,
}

impl SessionViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /login` y aplicar la decisión a la página
    pub async fn check_login_status(&self) -> Result<LoginStatus, String> {
        let status = self.api.fetch_login_status().await?;
        let decision = GateDecision::for_status(status);
        log::info!("🔐 Estado de sesión: {:?} → formularios {}", status, decision.forms.as_css());

        apply_gate(decision).map_err(|e| format!("DOM error: {:?}", e))?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_login_message_hides_forms_and_redirects() {
        let status = LoginStatus::from_response_body(&"a".repeat(50));
        let decision = GateDecision::for_status(status);
        assert_eq!(decision.forms, Visibility::Hidden);
        assert_eq!(decision.redirect, Some("/login"));
    }

    #[test]
    fn long_logout_message_shows_forms() {
        let status = LoginStatus::from_response_body(&"a".repeat(150));
        let decision = GateDecision::for_status(status);
        assert_eq!(decision.forms, Visibility::Visible);
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn css_values() {
        assert_eq!(Visibility::Visible.as_css(), "visible");
        assert_eq!(Visibility::Hidden.as_css(), "hidden");
    }
}
