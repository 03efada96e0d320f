use serde::Deserialize;

/// Por debajo de este largo el mensaje de `/login` es el enlace de "login"
/// (usuario sin sesión); el mensaje de "logout" es más largo.
pub const LOGGED_OUT_MESSAGE_MAX_LEN: usize = 100;

/// Estado de sesión que devuelve `GET /login`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    LoggedIn,
    LoggedOut,
}

/// Respuesta explícita opcional del backend: `{"loggedIn": true}`
#[derive(Debug, Deserialize)]
struct LoginStatusResponse {
    #[serde(rename = "loggedIn", alias = "logged_in")]
    logged_in: bool,
}

impl LoginStatus {
    /// Interpreta el cuerpo de `/login`.
    ///
    /// Si el backend envía el campo explícito `loggedIn` se usa tal cual. Si no,
    /// se clasifica por el largo del mensaje en unidades UTF-16 (lo mismo que
    /// `String.length` en el navegador).
    pub fn from_response_body(body: &str) -> Self {
        if let Ok(explicit) = serde_json::from_str::<LoginStatusResponse>(body.trim()) {
            return Self::from(explicit.logged_in);
        }

        if body.encode_utf16().count() < LOGGED_OUT_MESSAGE_MAX_LEN {
            LoginStatus::LoggedOut
        } else {
            LoginStatus::LoggedIn
        }
    }
}

impl From<bool> for LoginStatus {
    fn from(logged_in: bool) -> Self {
        if logged_in {
            LoginStatus::LoggedIn
        } else {
            LoginStatus::LoggedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_means_logged_out() {
        let body = "x".repeat(50);
        assert_eq!(LoginStatus::from_response_body(&body), LoginStatus::LoggedOut);
    }

    #[test]
    fn long_message_means_logged_in() {
        let body = "x".repeat(150);
        assert_eq!(LoginStatus::from_response_body(&body), LoginStatus::LoggedIn);
    }

    #[test]
    fn boundary_is_exclusive() {
        assert_eq!(LoginStatus::from_response_body(&"x".repeat(99)), LoginStatus::LoggedOut);
        assert_eq!(LoginStatus::from_response_body(&"x".repeat(100)), LoginStatus::LoggedIn);
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        // 60 caracteres "é" = 120 bytes UTF-8 pero 60 unidades UTF-16
        let body = "é".repeat(60);
        assert_eq!(LoginStatus::from_response_body(&body), LoginStatus::LoggedOut);
    }

    #[test]
    fn explicit_field_wins_over_length() {
        assert_eq!(
            LoginStatus::from_response_body(r#"{"loggedIn": true}"#),
            LoginStatus::LoggedIn
        );

        let padded = format!(r#"{{"loggedIn": false, "message": "{}"}}"#, "x".repeat(200));
        assert_eq!(LoginStatus::from_response_body(&padded), LoginStatus::LoggedOut);
    }

    #[test]
    fn snake_case_alias_is_accepted() {
        assert_eq!(
            LoginStatus::from_response_body(r#"{"logged_in": true}"#),
            LoginStatus::LoggedIn
        );
    }
}
