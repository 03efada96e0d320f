// ============================================================================
// GOOGLE MAPS FFI - Bindings a la API JavaScript de Google Maps
// ============================================================================
// Solo wrappers para clases JS - Sin estado, sin lógica
// El script de Google Maps se carga desde la página HTML.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &Element, options: &JsValue) -> Result<GoogleMap, JsValue>;

    /// `google.maps.Marker`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type GoogleMarker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<GoogleMarker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &GoogleMarker, map: &GoogleMap);

    /// `google.maps.Size`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Size)]
    pub type GoogleSize;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Size")]
    pub fn new(width: f64, height: f64) -> Result<GoogleSize, JsValue>;

    /// `google.maps.Point`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Point)]
    pub type GooglePoint;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Point")]
    pub fn new(x: f64, y: f64) -> Result<GooglePoint, JsValue>;
}

/// Helper: ¿está cargado `window.google.maps`?
pub fn google_maps_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .map(|maps| maps.is_object())
        .unwrap_or(false)
}
