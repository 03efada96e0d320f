// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners globales (window): solo deben registrarse UNA VEZ al inicio de la
// app, si no se acumulan. Por eso `on_window_load` se protege con un flag.
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::dom::window;

thread_local! {
    static LOAD_LISTENER_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Registrar el único handler de `load` de la página.
///
/// Llamadas posteriores se ignoran; devuelve `false` en ese caso.
pub fn on_window_load<F>(handler: F) -> Result<bool, JsValue>
where
    F: FnOnce() + 'static,
{
    if LOAD_LISTENER_REGISTERED.with(|flag| flag.replace(true)) {
        log::warn!("⚠️ Handler de load ya registrado, ignorando llamada duplicada");
        return Ok(false);
    }

    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::once(move |_e: Event| handler());
    win.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() mantiene vivo el closure; el load se dispara una sola vez
    closure.forget();
    Ok(true)
}
