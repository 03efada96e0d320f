// ============================================================================
// MARKER MODELS - Configuración del mapa y de cada marcador
// ============================================================================
// Estructuras puras (sin JS): se serializan y el FFI las convierte en objetos
// de Google Maps. Las coordenadas de icono crecen hacia la derecha (X) y hacia
// abajo (Y) desde la esquina superior izquierda de la imagen.
// ============================================================================

use serde::Serialize;

use super::restaurant::{LatLng, RestaurantMarker};
use super::theme::ThemeRule;

/// Tamaño en píxeles lógicos (`google.maps.Size`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Punto en píxeles lógicos (`google.maps.Point`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Icono del marcador
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub url: String,
    pub size: Size,
    pub origin: Point,
    /// Punto del icono que toca la coordenada geográfica (la base del mástil)
    pub anchor: Point,
}

impl MarkerIcon {
    /// Bandera de 20x32 anclada en su base (0, 32)
    pub fn beach_flag(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: Size::new(20, 32),
            origin: Point::new(0, 0),
            anchor: Point::new(0, 32),
        }
    }
}

/// Región clicable del icono: polígono `<area shape="poly">` como lista plana
/// de pares X,Y. El último punto se une implícitamente con el primero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerShape {
    pub coords: Vec<u32>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl MarkerShape {
    pub fn polygon(points: &[Point]) -> Self {
        Self {
            coords: points.iter().flat_map(|p| [p.x, p.y]).collect(),
            kind: "poly",
        }
    }

    /// Rectángulo (1,1)-(1,20)-(18,20)-(18,1), ligeramente dentro del icono
    pub fn flag_hit_region() -> Self {
        Self::polygon(&[
            Point::new(1, 1),
            Point::new(1, 20),
            Point::new(18, 20),
            Point::new(18, 1),
        ])
    }

    pub fn points(&self) -> Vec<Point> {
        self.coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect()
    }
}

/// Opciones de un marcador listas para `google.maps.Marker`
/// (el campo `map` lo añade el renderer).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub shape: MarkerShape,
    pub title: String,
    pub z_index: i32,
}

impl MarkerSpec {
    pub fn for_restaurant(restaurant: &RestaurantMarker, icon: &MarkerIcon, shape: &MarkerShape) -> Self {
        Self {
            position: restaurant.position(),
            icon: icon.clone(),
            shape: shape.clone(),
            title: restaurant.name.to_string(),
            z_index: restaurant.z_index,
        }
    }
}

/// Opciones del mapa listas para `google.maps.Map`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub styles: Vec<ThemeRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beach_flag_geometry_is_fixed() {
        let icon = MarkerIcon::beach_flag("/images/beachflag.png");
        assert_eq!(icon.size, Size::new(20, 32));
        assert_eq!(icon.origin, Point::new(0, 0));
        assert_eq!(icon.anchor, Point::new(0, 32));
    }

    #[test]
    fn hit_region_is_flat_poly() {
        let shape = MarkerShape::flag_hit_region();
        assert_eq!(shape.coords, vec![1, 1, 1, 20, 18, 20, 18, 1]);
        assert_eq!(shape.kind, "poly");
        assert_eq!(shape.points().len(), 4);

        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "poly");
    }

    #[test]
    fn marker_spec_copies_restaurant_fields() {
        let restaurant = RestaurantMarker::new("Lou Malnati's", 42.15217208862305, -87.96086883544922, 3);
        let spec = MarkerSpec::for_restaurant(
            &restaurant,
            &MarkerIcon::beach_flag("/images/beachflag.png"),
            &MarkerShape::flag_hit_region(),
        );

        assert_eq!(spec.title, "Lou Malnati's");
        assert_eq!(spec.z_index, 3);
        assert_eq!(spec.position, LatLng::new(42.15217208862305, -87.96086883544922));

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["zIndex"], 3);
        assert_eq!(json["position"]["lng"], -87.96086883544922);
    }
}
