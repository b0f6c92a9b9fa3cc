// ============================================================================
// LOAD MODAL - Alta y edición de cargas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::state::{AppState, LoadModal};
use crate::viewmodels::{LoadForm, LoadsViewModel};
use crate::views::shared::create_form_group;

/// Renderizar el modal de alta/edición de carga
pub fn render_load_modal(state: &AppState, modal: &LoadModal) -> Result<Element, JsValue> {
    let (title, initial, editing_id) = match modal {
        LoadModal::Add => {
            let mut form = LoadForm::default();
            if let Some(user) = state.auth.get_user() {
                form.user = user.id;
            }
            ("Add load", form, None)
        }
        LoadModal::Edit(load) => ("Edit load", LoadForm::from_load(load), Some(load.id.clone())),
    };

    let name = Rc::new(RefCell::new(initial.name));
    let volume = Rc::new(RefCell::new(initial.volume));
    let price = Rc::new(RefCell::new(initial.price));
    let car = Rc::new(RefCell::new(initial.car));
    let from_loc = Rc::new(RefCell::new(initial.from_loc));
    let to_loc = Rc::new(RefCell::new(initial.to_loc));
    let payment_method = Rc::new(RefCell::new(initial.payment_method));
    let user = initial.user;

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let modal_el = ElementBuilder::new("div")?.class("modal").build();

    let title_el = ElementBuilder::new("h3")?.text(title).build();
    append_child(&modal_el, &title_el)?;

    let form_el = ElementBuilder::new("div")?.class("modal-form").build();
    let groups = [
        create_form_group("load-name", "Name", "Load name", "text", name.clone())?,
        create_form_group("load-volume", "Volume (m³)", "5", "text", volume.clone())?,
        create_form_group("load-price", "Price", "100", "text", price.clone())?,
        create_form_group("load-car", "Car", "Assigned car id", "text", car.clone())?,
        create_form_group("load-from", "From", "Origin location id", "text", from_loc.clone())?,
        create_form_group("load-to", "To", "Destination location id", "text", to_loc.clone())?,
        create_form_group(
            "load-payment",
            "Payment method",
            "cash / card / transfer",
            "text",
            payment_method.clone(),
        )?,
    ];
    for group in groups {
        append_child(&form_el, &group)?;
    }
    append_child(&modal_el, &form_el)?;

    let actions = ElementBuilder::new("div")?.class("modal-actions").build();

    let cancel_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel_btn, move |_| {
            state.set_load_modal(None);
            state.notify_subscribers();
        })?;
    }
    append_child(&actions, &cancel_btn)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("Save")
        .build();
    {
        let state = state.clone();
        on_click(&save_btn, move |_| {
            let form = LoadForm {
                name: name.borrow().trim().to_string(),
                volume: volume.borrow().clone(),
                price: price.borrow().clone(),
                user: user.clone(),
                car: car.borrow().clone(),
                from_loc: from_loc.borrow().clone(),
                to_loc: to_loc.borrow().clone(),
                payment_method: payment_method.borrow().clone(),
            };

            if form.name.is_empty() {
                alert("Name is required");
                return;
            }
            // Normalización: volume/price numéricos
            if let Err(e) = form.normalize() {
                alert(&e);
                return;
            }

            let state = state.clone();
            let editing_id = editing_id.clone();
            spawn_local(async move {
                let vm = LoadsViewModel::new();
                let result = match editing_id {
                    Some(id) => vm.update(&state, &id, form).await,
                    None => vm.create(&state, form).await,
                };

                match result {
                    Ok(()) => {
                        state.set_load_modal(None);
                        state.notify_subscribers();
                    }
                    Err(e) => alert(&format!("Failed to save load: {}", e)),
                }
            });
        })?;
    }
    append_child(&actions, &save_btn)?;

    append_child(&modal_el, &actions)?;
    append_child(&overlay, &modal_el)?;
    Ok(overlay)
}
