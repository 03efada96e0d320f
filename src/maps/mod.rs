// Módulo de mapas: trait común + implementación web (Google Maps JS)

pub mod traits;
pub mod web;

pub use traits::{MapError, MapRenderer};
pub use web::GoogleMapsRenderer;
