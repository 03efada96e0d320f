// ============================================================================
// MAP VIEWMODEL - Lógica del mapa de restaurantes
// ============================================================================
// Prepara opciones y marcadores a partir de PortfolioConfig y los entrega al
// renderer. Sin estado propio.
// ============================================================================

use crate::config::PortfolioConfig;
use crate::maps::{MapError, MapRenderer};
use crate::models::MarkerSpec;

/// ViewModel del mapa
pub struct MapViewModel<'a, R: MapRenderer> {
    renderer: &'a R,
    config: &'a PortfolioConfig,
}

impl<'a, R: MapRenderer> MapViewModel<'a, R> {
    pub fn new(renderer: &'a R, config: &'a PortfolioConfig) -> Self {
        Self { renderer, config }
    }

    /// Un marcador por restaurante, en el orden de la tabla
    pub fn marker_specs(&self) -> Vec<MarkerSpec> {
        self.config
            .restaurants
            .iter()
            .map(|restaurant| {
                MarkerSpec::for_restaurant(restaurant, &self.config.marker_icon, &self.config.marker_shape)
            })
            .collect()
    }

    /// Crear el mapa (centro, zoom y tema fijos) y colocar los marcadores
    pub fn initialize(&self) -> Result<R::Map, MapError> {
        let options = self.config.map_options();
        log::info!(
            "🗺️ Inicializando mapa en ({}, {}) zoom {} con {} reglas de tema",
            options.center.lat,
            options.center.lng,
            options.zoom,
            options.styles.len()
        );

        let map = self.renderer.create_map(self.config.container_id, &options)?;
        let placed = self.place_markers(&map)?;
        log::info!("✅ Mapa listo con {} marcadores", placed);
        Ok(map)
    }

    /// Agregar los marcadores al mapa; devuelve cuántos se colocaron
    pub fn place_markers(&self, map: &R::Map) -> Result<usize, MapError> {
        let specs = self.marker_specs();
        for spec in &specs {
            self.renderer.add_marker(map, spec)?;
        }
        Ok(specs.len())
    }
}
