use crate::models::{MapOptions, MarkerSpec};

/// Trait común para renderizadores de mapas.
///
/// La implementación web usa Google Maps JS; los tests usan un renderer que
/// solo registra las llamadas.
pub trait MapRenderer {
    /// Handle del mapa vivo creado por el renderer
    type Map;

    /// Crear el mapa dentro del elemento `container_id`, reemplazando su contenido
    fn create_map(&self, container_id: &str, options: &MapOptions) -> Result<Self::Map, MapError>;

    /// Crear un marcador y agregarlo al mapa
    fn add_marker(&self, map: &Self::Map, marker: &MarkerSpec) -> Result<(), MapError>;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// `google.maps` no está cargado en la página
    LibraryNotLoaded,
    ContainerNotFound(String),
    InvalidOptions(String),
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::LibraryNotLoaded => write!(f, "Map library is not loaded"),
            MapError::ContainerNotFound(id) => write!(f, "Map container #{} not found", id),
            MapError::InvalidOptions(msg) => write!(f, "Invalid map options: {}", msg),
            MapError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
