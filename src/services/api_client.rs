// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::UrlSearchParams;

use crate::config::CONFIG;
use crate::models::{LoginStatus, Review, ReviewSubmission};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn reviews_url(&self, max_reviews: u32) -> String {
        format!("{}/reviews?max-reviews={}", self.base_url, max_reviews)
    }

    pub fn submit_review_url(&self) -> String {
        format!("{}/reviews", self.base_url)
    }

    pub fn delete_data_url(&self) -> String {
        format!("{}/delete-data", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Listar reseñas
    pub async fn fetch_reviews(&self, max_reviews: u32) -> Result<Vec<Review>, String> {
        let url = self.reviews_url(max_reviews);
        log::info!("💬 Obteniendo hasta {} reseñas...", max_reviews);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        read_reviews(response).await
    }

    /// Listar reseñas tras un borrado (el backend devuelve la lista restante)
    pub async fn delete_reviews(&self) -> Result<Vec<Review>, String> {
        let url = self.delete_data_url();

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        read_reviews(response).await
    }

    /// Borrar todas las reseñas guardadas en el backend
    pub async fn purge_reviews(&self) -> Result<(), String> {
        let url = self.delete_data_url();
        log::info!("🗑️ Borrando todas las reseñas...");

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        ensure_ok(&response)
    }

    /// Enviar una reseña (form-urlencoded, como el formulario HTML)
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), String> {
        let url = self.submit_review_url();
        let params = UrlSearchParams::new().map_err(|e| format!("Request build error: {:?}", e))?;
        for (name, value) in submission.form_fields() {
            params.append(name, value);
        }

        log::info!("📝 Enviando reseña de {}", submission.reviewer_name);

        let response = Request::post(&url)
            .body(params)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        ensure_ok(&response)
    }

    /// Estado de sesión (el cuerpo se clasifica aunque el status no sea 2xx)
    pub async fn fetch_login_status(&self) -> Result<LoginStatus, String> {
        let url = self.login_url();

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(classify_login_reply(status, &body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

fn classify_login_reply(status: u16, body: &str) -> LoginStatus {
    if !(200..300).contains(&status) {
        log::warn!("⚠️ /login respondió HTTP {}, clasificando el cuerpo igualmente", status);
    }
    LoginStatus::from_response_body(body)
}

async fn read_reviews(response: Response) -> Result<Vec<Review>, String> {
    ensure_ok(&response)?;

    let reviews = response
        .json::<Vec<Review>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("✅ {} reseñas recibidas", reviews.len());
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_relative_without_backend() {
        let api = ApiClient::with_base_url("");
        assert_eq!(api.reviews_url(5), "/reviews?max-reviews=5");
        assert_eq!(api.delete_data_url(), "/delete-data");
        assert_eq!(api.login_url(), "/login");
        assert_eq!(api.submit_review_url(), "/reviews");
    }

    #[test]
    fn urls_use_backend_prefix() {
        let api = ApiClient::with_base_url("https://portfolio.example.com");
        assert_eq!(
            api.reviews_url(3),
            "https://portfolio.example.com/reviews?max-reviews=3"
        );
    }

    #[test]
    fn login_body_is_classified_on_error_status() {
        assert_eq!(classify_login_reply(500, &"x".repeat(50)), LoginStatus::LoggedOut);
        assert_eq!(classify_login_reply(404, &"x".repeat(150)), LoginStatus::LoggedIn);
    }

    #[test]
    fn login_body_is_classified_on_success() {
        assert_eq!(classify_login_reply(200, &"x".repeat(50)), LoginStatus::LoggedOut);
        assert_eq!(classify_login_reply(200, r#"{"loggedIn": true}"#), LoginStatus::LoggedIn);
    }
}
