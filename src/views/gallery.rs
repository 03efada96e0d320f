use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlImageElement};

use crate::dom::{get_element_by_id, scroll_to_bottom, set_style};
use crate::utils::constants::EXPANDED_IMAGE_ID;

/// Muestra la miniatura en `#expandedImg` y baja hasta el final de la página
pub fn expand_image(thumbnail: &HtmlImageElement) -> Result<(), JsValue> {
    let expanded = get_element_by_id(EXPANDED_IMAGE_ID)
        .ok_or_else(|| JsValue::from_str("No #expandedImg element found"))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| JsValue::from_str("#expandedImg is not an <img>"))?;

    expanded.set_src(&thumbnail.src());

    let frame = expanded
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str("#expandedImg has no container"))?;
    set_style(&frame, "display", "block")?;

    // Esperar al layout para que scrollHeight incluya la imagen ya visible
    Timeout::new(0, || {
        if let Err(e) = scroll_to_bottom() {
            log::error!("❌ Error haciendo scroll: {:?}", e);
        }
    })
    .forget();

    Ok(())
}
