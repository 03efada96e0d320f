use wasm_bindgen::JsValue;

use crate::dom::{get_html_element_by_id, set_inner_text};
use crate::models::{format_reviews, Review};
use crate::utils::constants::REVIEWS_CONTAINER_ID;

/// Reemplaza el texto de `#reviews-container` con la lista de reseñas
pub fn render_reviews(reviews: &[Review]) -> Result<(), JsValue> {
    let container = get_html_element_by_id(REVIEWS_CONTAINER_ID)?;
    set_inner_text(&container, &format_reviews(reviews));
    Ok(())
}
