use crate::models::{LatLng, MapOptions, MarkerIcon, MarkerShape, RestaurantMarker, ThemeRule};
use crate::utils::constants::{MAP_CENTER, MAP_CONTAINER_ID, MAP_ZOOM, NIGHT_THEME, RESTAURANTS};

const DEFAULT_MARKER_ICON_URL: &str = "/images/beachflag.png";
const DEFAULT_MAX_REVIEWS: u32 = 10;

/// Configuración del sitio, fijada en tiempo de compilación (ver build.rs)
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Prefijo de las URLs del backend; vacío = mismo origen
    pub backend_url: String,
    /// Cantidad de reseñas cuando el input no trae un número válido
    pub default_max_reviews: u32,
    pub log_level: log::Level,
    pub marker_icon_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            default_max_reviews: DEFAULT_MAX_REVIEWS,
            log_level: log::Level::Info,
            marker_icon_url: DEFAULT_MARKER_ICON_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("DEFAULT_MAX_REVIEWS"),
            option_env!("LOG_LEVEL"),
            option_env!("MARKER_ICON_URL"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        default_max_reviews: Option<&str>,
        log_level: Option<&str>,
        marker_icon_url: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            default_max_reviews: default_max_reviews
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.default_max_reviews),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
            marker_icon_url: marker_icon_url
                .map(str::to_string)
                .unwrap_or(defaults.marker_icon_url),
        }
    }

    /// URL absoluta (o relativa al origen) de un endpoint del backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: SiteConfig = SiteConfig::from_env();
}

/// Configuración inmutable del mapa: tablas estáticas + geometría del marcador.
/// Se construye una vez al arrancar y se pasa al renderer.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub container_id: &'static str,
    pub center: LatLng,
    pub zoom: u8,
    pub theme: &'static [ThemeRule],
    pub restaurants: &'static [RestaurantMarker],
    pub marker_icon: MarkerIcon,
    pub marker_shape: MarkerShape,
}

impl PortfolioConfig {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            container_id: MAP_CONTAINER_ID,
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            theme: NIGHT_THEME,
            restaurants: RESTAURANTS,
            marker_icon: MarkerIcon::beach_flag(site.marker_icon_url.as_str()),
            marker_shape: MarkerShape::flag_hit_region(),
        }
    }

    /// Misma configuración con otra tabla de restaurantes
    pub fn with_restaurants(mut self, restaurants: &'static [RestaurantMarker]) -> Self {
        self.restaurants = restaurants;
        self
    }

    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: self.center,
            zoom: self.zoom,
            styles: self.theme.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_same_origin() {
        let config = SiteConfig::from_values(None, None, None, None);
        assert_eq!(config.endpoint("/reviews"), "/reviews");
        assert_eq!(config.default_max_reviews, 10);
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.marker_icon_url, "/images/beachflag.png");
    }

    #[test]
    fn backend_url_trailing_slash_is_trimmed() {
        let config = SiteConfig::from_values(Some("https://example.com/"), None, None, None);
        assert_eq!(config.endpoint("/login"), "https://example.com/login");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = SiteConfig::from_values(None, Some("many"), Some("loud"), None);
        assert_eq!(config.default_max_reviews, 10);
        assert_eq!(config.log_level, log::Level::Info);

        let config = SiteConfig::from_values(None, Some("25"), Some("debug"), None);
        assert_eq!(config.default_max_reviews, 25);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn map_options_match_fixed_view() {
        let options = PortfolioConfig::new(&SiteConfig::default()).map_options();
        assert_eq!(options.center, LatLng::new(42.1784, -87.9979));
        assert_eq!(options.zoom, 11);
        assert_eq!(options.styles.as_slice(), NIGHT_THEME);
    }

    #[test]
    fn map_options_are_identical_across_builds() {
        let config = PortfolioConfig::new(&SiteConfig::default());
        assert_eq!(config.map_options(), config.map_options());
    }
}
