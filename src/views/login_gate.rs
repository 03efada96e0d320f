use wasm_bindgen::JsValue;

use crate::dom::{get_html_element_by_id, navigate_to, set_style};
use crate::utils::constants::{CHECK_REVIEWS_FORM_ID, SUBMIT_REVIEWS_FORM_ID};
use crate::viewmodels::GateDecision;

const GATED_FORMS: [&str; 2] = [SUBMIT_REVIEWS_FORM_ID, CHECK_REVIEWS_FORM_ID];

/// Cambia la visibilidad de los formularios y, si corresponde, redirige
pub fn apply_gate(decision: GateDecision) -> Result<(), JsValue> {
    for id in GATED_FORMS {
        let form = get_html_element_by_id(id)?;
        set_style(&form, "visibility", decision.forms.as_css())?;
    }

    if let Some(url) = decision.redirect {
        log::info!("↪️ Sin sesión, redirigiendo a {}", url);
        navigate_to(url)?;
    }
    Ok(())
}
