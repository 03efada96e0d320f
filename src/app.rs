// ============================================================================
// APP - Inicialización de la página
// ============================================================================
// Un solo bundle sirve a todas las páginas del portfolio: cada parte se activa
// solo si su elemento existe en la página actual.
// ============================================================================

use crate::config::{PortfolioConfig, CONFIG};
use crate::dom::get_element_by_id;
use crate::maps::GoogleMapsRenderer;
use crate::services::ApiClient;
use crate::utils::constants::SUBMIT_REVIEWS_FORM_ID;
use crate::utils::google_maps_ffi::GoogleMap;
use crate::viewmodels::{MapViewModel, SessionViewModel};

/// Estado de la página tras el load
pub struct App {
    config: PortfolioConfig,
    api: ApiClient,
    map: Option<GoogleMap>,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: PortfolioConfig::new(&CONFIG),
            api: ApiClient::new(),
            map: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_map_rendered(&self) -> bool {
        self.map.is_some()
    }

    /// Handler del evento `load` (se ejecuta una sola vez)
    pub fn on_load(&mut self) {
        log::info!("🎬 [APP] Página cargada");

        if get_element_by_id(self.config.container_id).is_some() {
            self.render_map();
        } else {
            log::debug!("Sin #{} en esta página, mapa omitido", self.config.container_id);
        }

        if get_element_by_id(SUBMIT_REVIEWS_FORM_ID).is_some() {
            let session = SessionViewModel::new(self.api.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = session.check_login_status().await {
                    log::error!("❌ [APP] Error verificando sesión: {}", e);
                }
            });
        }
    }

    fn render_map(&mut self) {
        if self.map.is_some() {
            log::warn!("⚠️ [APP] El mapa ya está renderizado");
            return;
        }

        let renderer = GoogleMapsRenderer::new();
        match MapViewModel::new(&renderer, &self.config).initialize() {
            Ok(map) => self.map = Some(map),
            Err(e) => log::error!("❌ [APP] Error inicializando mapa: {}", e),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
