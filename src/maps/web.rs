use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{MapError, MapRenderer};
use crate::dom::get_element_by_id;
use crate::models::{MapOptions, MarkerIcon, MarkerSpec};
use crate::utils::google_maps_ffi::{google_maps_loaded, GoogleMap, GoogleMarker, GooglePoint, GoogleSize};

/// Renderizador de mapas para web usando Google Maps JS
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleMapsRenderer;

impl GoogleMapsRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Icono con instancias reales de `google.maps.Size`/`google.maps.Point`
    fn icon_object(icon: &MarkerIcon) -> Result<JsValue, MapError> {
        let object = to_js_object(icon)?;
        let size = GoogleSize::new(icon.size.width.into(), icon.size.height.into()).map_err(js_error)?;
        let origin = GooglePoint::new(icon.origin.x.into(), icon.origin.y.into()).map_err(js_error)?;
        let anchor = GooglePoint::new(icon.anchor.x.into(), icon.anchor.y.into()).map_err(js_error)?;

        set_property(&object, "size", &size)?;
        set_property(&object, "origin", &origin)?;
        set_property(&object, "anchor", &anchor)?;
        Ok(object)
    }
}

impl MapRenderer for GoogleMapsRenderer {
    type Map = GoogleMap;

    fn create_map(&self, container_id: &str, options: &MapOptions) -> Result<GoogleMap, MapError> {
        if !google_maps_loaded() {
            return Err(MapError::LibraryNotLoaded);
        }

        let container = get_element_by_id(container_id)
            .ok_or_else(|| MapError::ContainerNotFound(container_id.to_string()))?;
        let options = to_js_object(options)?;

        log::info!("🗺️ Creando mapa en #{}", container_id);
        GoogleMap::new(&container, &options).map_err(js_error)
    }

    fn add_marker(&self, map: &GoogleMap, marker: &MarkerSpec) -> Result<(), MapError> {
        let options = to_js_object(marker)?;
        set_property(&options, "icon", &Self::icon_object(&marker.icon)?)?;
        set_property(&options, "map", map)?;

        let google_marker = GoogleMarker::new(&options).map_err(js_error)?;
        google_marker.set_map(map);

        log::debug!(
            "📍 Marcador '{}' en ({}, {}) zIndex {}",
            marker.title,
            marker.position.lat,
            marker.position.lng,
            marker.z_index
        );
        Ok(())
    }
}

/// Serializa con serde_json y lo convierte en objeto JS plano
fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    let json = serde_json::to_string(value).map_err(|e| MapError::InvalidOptions(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), MapError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

fn js_error(err: JsValue) -> MapError {
    MapError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
