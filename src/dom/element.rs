// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID como HtmlElement (error si no existe)
pub fn get_html_element_by_id(id: &str) -> Result<HtmlElement, JsValue> {
    get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HtmlElement", id)))
}

/// Valor de un `<input>` o `<textarea>` por ID
pub fn get_input_value(id: &str) -> Result<String, JsValue> {
    let element = get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))?;

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(textarea.value());
    }
    Err(JsValue::from_str(&format!("#{} is not an input", id)))
}

/// Establecer innerText (respeta los saltos de línea)
pub fn set_inner_text(element: &HtmlElement, text: &str) {
    element.set_inner_text(text);
}

/// Establecer una propiedad CSS inline
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(property, value)
}

/// Navegar a otra URL (equivale a `window.location = url`)
pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

/// Scroll hasta el final de la página
pub fn scroll_to_bottom() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;

    window.scroll_to_with_x_and_y(0.0, f64::from(body.scroll_height()));
    Ok(())
}
