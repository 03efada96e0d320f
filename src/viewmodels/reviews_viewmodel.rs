// ============================================================================
// REVIEWS VIEWMODEL - Listar, enviar y borrar reseñas
// ============================================================================

use crate::config::CONFIG;
use crate::dom::get_input_value;
use crate::models::ReviewSubmission;
use crate::services::ApiClient;
use crate::utils::constants::{MAX_REVIEWS_INPUT_ID, REVIEWER_INPUT_ID, REVIEWER_NAME_INPUT_ID};
use crate::views::reviews::render_reviews;

/// Cantidad pedida por el usuario; si no es un número válido se usa `default`
pub fn parse_max_reviews(input: &str, default: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            log::warn!("⚠️ Cantidad de reseñas inválida '{}', usando {}", input, default);
            default
        }
    }
}

pub struct ReviewsViewModel {
    api: ApiClient,
}

impl ReviewsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /reviews?max-reviews=N` con N leído de `#max-comments`
    pub async fn load_reviews(&self) -> Result<(), String> {
        let input = get_input_value(MAX_REVIEWS_INPUT_ID).unwrap_or_default();
        let max_reviews = parse_max_reviews(&input, CONFIG.default_max_reviews);

        let reviews = self.api.fetch_reviews(max_reviews).await?;
        render_reviews(&reviews).map_err(|e| format!("DOM error: {:?}", e))
    }

    /// `GET /delete-data` y mostrar lo que quede
    pub async fn delete_reviews(&self) -> Result<(), String> {
        let reviews = self.api.delete_reviews().await?;
        if !reviews.is_empty() {
            log::warn!("⚠️ Quedan {} reseñas después del borrado", reviews.len());
        }
        render_reviews(&reviews).map_err(|e| format!("DOM error: {:?}", e))
    }

    /// Borrar todo en el backend y refrescar la lista
    pub async fn purge_reviews(&self) -> Result<(), String> {
        self.api.purge_reviews().await?;
        self.delete_reviews().await
    }

    /// Enviar la reseña del formulario y refrescar la lista
    pub async fn submit_review(&self) -> Result<(), String> {
        let name = get_input_value(REVIEWER_NAME_INPUT_ID).map_err(|e| format!("DOM error: {:?}", e))?;
        let input = get_input_value(REVIEWER_INPUT_ID).map_err(|e| format!("DOM error: {:?}", e))?;

        self.api.submit_review(&ReviewSubmission::new(name, input)).await?;
        self.load_reviews().await
    }
}
