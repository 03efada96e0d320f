use serde::{Deserialize, Serialize};

/// Coordenada geográfica en el formato literal de Google Maps (`{lat, lng}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Restaurante que se muestra como marcador en el mapa.
///
/// La tabla de restaurantes se compila en el cliente (`utils::constants::RESTAURANTS`)
/// y nunca se modifica en tiempo de ejecución.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantMarker {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Orden de apilamiento: mayor z_index se dibuja encima
    #[serde(rename = "zIndex")]
    pub z_index: i32,
}

impl RestaurantMarker {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64, z_index: i32) -> Self {
        Self {
            name,
            latitude,
            longitude,
            z_index,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_keeps_latitude_and_longitude_order() {
        let bonta = RestaurantMarker::new("Bonta", 42.1992, -87.9333, 4);
        assert_eq!(bonta.position(), LatLng { lat: 42.1992, lng: -87.9333 });
    }

    #[test]
    fn serializes_z_index_in_camel_case() {
        let joanies = RestaurantMarker::new("Joanie's", 42.178654, -87.9975738, 2);
        let json = serde_json::to_value(&joanies).unwrap();
        assert_eq!(json["name"], "Joanie's");
        assert_eq!(json["zIndex"], 2);
        assert!(json.get("z_index").is_none());
    }
}
