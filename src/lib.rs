// ============================================================================
// PORTFOLIO WEB - Cliente del sitio (Rust + WASM)
// ============================================================================
// - Models: datos estáticos y estructuras de la API
// - Maps: trait MapRenderer + Google Maps
// - Services: SOLO comunicación HTTP
// - ViewModels: lógica de UI
// - Views: escritura en el DOM
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod maps;
pub mod models;
mod services;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::app::App;
use crate::config::CONFIG;
use crate::viewmodels::ReviewsViewModel;

thread_local! {
    static APP: RefCell<App> = RefCell::new(App::new());
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("🚀 Portfolio - Rust + WASM");

    // Único punto de entrada de la página
    dom::on_window_load(|| {
        APP.with(|app| app.borrow_mut().on_load());
    })?;

    Ok(())
}

fn reviews_viewmodel() -> ReviewsViewModel {
    ReviewsViewModel::new(APP.with(|app| app.borrow().api().clone()))
}

/// Botón "ver reseñas"
#[wasm_bindgen(js_name = getReviews)]
pub fn get_reviews() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = reviews_viewmodel().load_reviews().await {
            log::error!("❌ Error obteniendo reseñas: {}", e);
        }
    });
}

/// Botón "borrar reseñas" (solo vuelve a listar lo que queda)
#[wasm_bindgen(js_name = deleteReviews)]
pub fn delete_reviews() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = reviews_viewmodel().delete_reviews().await {
            log::error!("❌ Error borrando reseñas: {}", e);
        }
    });
}

/// Borra todas las reseñas en el backend y refresca la lista
#[wasm_bindgen(js_name = purgeReviews)]
pub fn purge_reviews() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = reviews_viewmodel().purge_reviews().await {
            log::error!("❌ Error borrando reseñas: {}", e);
        }
    });
}

/// Envía la reseña del formulario
#[wasm_bindgen(js_name = submitReview)]
pub fn submit_review() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = reviews_viewmodel().submit_review().await {
            log::error!("❌ Error enviando reseña: {}", e);
        }
    });
}

/// `onclick="expandImage(this)"` en las miniaturas
#[wasm_bindgen(js_name = expandImage)]
pub fn expand_image(thumbnail: HtmlImageElement) {
    if let Err(e) = views::gallery::expand_image(&thumbnail) {
        log::error!("❌ Error expandiendo imagen: {:?}", e);
    }
}

/// ¿Ya se dibujó el mapa en esta página?
#[wasm_bindgen(js_name = isMapRendered)]
pub fn is_map_rendered() -> bool {
    APP.with(|app| app.borrow().is_map_rendered())
}
