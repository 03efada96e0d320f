use crate::models::{LatLng, RestaurantMarker, Styler, ThemeRule};

/// Centro del mapa (Buffalo Grove / Northbrook, IL)
pub const MAP_CENTER: LatLng = LatLng::new(42.1784, -87.9979);

/// Zoom en la escala discreta de Google Maps
pub const MAP_ZOOM: u8 = 11;

// IDs de elementos en las páginas HTML
pub const MAP_CONTAINER_ID: &str = "map";
pub const REVIEWS_CONTAINER_ID: &str = "reviews-container";
pub const MAX_REVIEWS_INPUT_ID: &str = "max-comments";
pub const REVIEWER_NAME_INPUT_ID: &str = "reviewer-name";
pub const REVIEWER_INPUT_ID: &str = "reviewer-input";
pub const SUBMIT_REVIEWS_FORM_ID: &str = "submit-reviews-form";
pub const CHECK_REVIEWS_FORM_ID: &str = "check-reviews-form";
pub const EXPANDED_IMAGE_ID: &str = "expandedImg";

/// Página a la que se redirige cuando no hay sesión
pub const LOGIN_PAGE: &str = "/login";

/// Restaurantes del mapa, en orden de colocación
pub const RESTAURANTS: &[RestaurantMarker] = &[
    RestaurantMarker::new("Bonta", 42.1992, -87.9333, 4),
    RestaurantMarker::new("Walker Bros", 42.194679260253906, -87.92904663085938, 5),
    RestaurantMarker::new("Lou Malnati's", 42.15217208862305, -87.96086883544922, 3),
    RestaurantMarker::new("Joanie's", 42.178654, -87.9975738, 2),
    RestaurantMarker::new("Portillo's", 42.2409503, -87.9474605, 1),
];

/// Tema nocturno del mapa
pub const NIGHT_THEME: &[ThemeRule] = &[
    ThemeRule::element("geometry", &[Styler::color("#242f3e")]),
    ThemeRule::element("labels.text.stroke", &[Styler::color("#242f3e")]),
    ThemeRule::element("labels.text.fill", &[Styler::color("#746855")]),
    ThemeRule::feature("administrative.locality", "labels.text.fill", &[Styler::color("#d59563")]),
    ThemeRule::feature("poi", "labels.text.fill", &[Styler::color("#d59563")]),
    ThemeRule::feature("poi.park", "geometry", &[Styler::color("#263c3f")]),
    ThemeRule::feature("poi.park", "labels.text.fill", &[Styler::color("#6b9a76")]),
    ThemeRule::feature("road", "geometry", &[Styler::color("#38414e")]),
    ThemeRule::feature("road", "geometry.stroke", &[Styler::color("#212a37")]),
    ThemeRule::feature("road", "labels.text.fill", &[Styler::color("#9ca5b3")]),
    ThemeRule::feature("road.highway", "geometry", &[Styler::color("#746855")]),
    ThemeRule::feature("road.highway", "geometry.stroke", &[Styler::color("#1f2835")]),
    ThemeRule::feature("road.highway", "labels.text.fill", &[Styler::color("#f3d19c")]),
    ThemeRule::feature("transit", "geometry", &[Styler::color("#2f3948")]),
    ThemeRule::feature("transit.station", "labels.text.fill", &[Styler::color("#d59563")]),
    ThemeRule::feature("water", "geometry", &[Styler::color("#17263c")]),
    ThemeRule::feature("water", "labels.text.fill", &[Styler::color("#515c6d")]),
    ThemeRule::feature("water", "labels.text.stroke", &[Styler::color("#17263c")]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn restaurant_names_are_not_empty() {
        assert_eq!(RESTAURANTS.len(), 5);
        assert!(RESTAURANTS.iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn theme_has_no_duplicate_selectors() {
        let selectors: HashSet<_> = NIGHT_THEME.iter().map(ThemeRule::selector).collect();
        assert_eq!(selectors.len(), NIGHT_THEME.len());
        assert_eq!(NIGHT_THEME.len(), 18);
    }

    #[test]
    fn first_three_theme_rules_apply_globally() {
        assert!(NIGHT_THEME[..3].iter().all(|r| r.feature_type.is_none()));
        assert!(NIGHT_THEME[3..].iter().all(|r| r.feature_type.is_some()));
    }
}
