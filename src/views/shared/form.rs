// ============================================================================
// FORM HELPERS - Grupos label+input compartidos por los formularios
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, InputEvent};

use crate::dom::{append_child, on_input, ElementBuilder};

/// Crear un grupo label+input cuyo valor vive en un Rc<RefCell<String>>.
/// El input se prellena con el valor actual (modales de edición).
pub fn create_form_group(
    id: &str,
    label: &str,
    placeholder: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let initial = value.borrow().clone();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", &initial)?
        .build();

    {
        let value = value.clone();
        on_input(&input, move |e: InputEvent| {
            if let Some(target) = e.target() {
                if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
                    *value.borrow_mut() = input.value();
                }
            }
        })?;
    }

    append_child(&group, &label_el)?;
    append_child(&group, &input)?;
    Ok(group)
}
