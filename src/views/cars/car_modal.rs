// ============================================================================
// CAR MODAL - Alta y edición de vehículos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::state::{AppState, CarModal};
use crate::viewmodels::{CarForm, CarsViewModel};
use crate::views::shared::create_form_group;

/// Renderizar el modal de alta/edición de vehículo
pub fn render_car_modal(state: &AppState, modal: &CarModal) -> Result<Element, JsValue> {
    // Prellenado: en edición desde el registro, en alta el usuario actual
    let (title, initial, editing_id) = match modal {
        CarModal::Add => {
            let mut form = CarForm::default();
            if let Some(user) = state.auth.get_user() {
                form.user = user.id;
            }
            ("Add car", form, None)
        }
        CarModal::Edit(car) => ("Edit car", CarForm::from_car(car), Some(car.id.clone())),
    };

    let name = Rc::new(RefCell::new(initial.name));
    let model = Rc::new(RefCell::new(initial.model));
    let car_type = Rc::new(RefCell::new(initial.car_type));
    let car_number = Rc::new(RefCell::new(initial.car_number));
    let volume = Rc::new(RefCell::new(initial.volume));
    let from = Rc::new(RefCell::new(initial.from));
    let to = Rc::new(RefCell::new(initial.to));
    let location = Rc::new(RefCell::new(initial.location));
    let user = initial.user;

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let modal_el = ElementBuilder::new("div")?.class("modal").build();

    let title_el = ElementBuilder::new("h3")?.text(title).build();
    append_child(&modal_el, &title_el)?;

    let form_el = ElementBuilder::new("div")?.class("modal-form").build();
    let groups = [
        create_form_group("car-name", "Name", "Truck name", "text", name.clone())?,
        create_form_group("car-model", "Model", "Model", "text", model.clone())?,
        create_form_group("car-type", "Type", "tent / ref / board", "text", car_type.clone())?,
        create_form_group("car-number", "Plate number", "01A777BB", "text", car_number.clone())?,
        create_form_group("car-volume", "Volume (m³)", "10", "text", volume.clone())?,
        create_form_group("car-from", "From", "Origin location id", "text", from.clone())?,
        create_form_group("car-to", "To", "Destination location id", "text", to.clone())?,
        create_form_group(
            "car-location",
            "Location (JSON)",
            r#"{"lat": 41.31, "lon": 69.24}"#,
            "text",
            location.clone(),
        )?,
    ];
    for group in groups {
        append_child(&form_el, &group)?;
    }
    append_child(&modal_el, &form_el)?;

    // Acciones
    let actions = ElementBuilder::new("div")?.class("modal-actions").build();

    let cancel_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel_btn, move |_| {
            state.set_car_modal(None);
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
            let form = CarForm {
                name: name.borrow().trim().to_string(),
                volume: volume.borrow().clone(),
                user: user.clone(),
                car_type: car_type.borrow().clone(),
                car_number: car_number.borrow().clone(),
                from: from.borrow().clone(),
                to: to.borrow().clone(),
                model: model.borrow().clone(),
                location: location.borrow().clone(),
            };

            if form.name.is_empty() {
                alert("Name is required");
                return;
            }
            // La normalización (volume numérico, location JSON) valida el resto
            if let Err(e) = form.normalize() {
                alert(&e);
                return;
            }

            let state = state.clone();
            let editing_id = editing_id.clone();
            spawn_local(async move {
                let vm = CarsViewModel::new();
                let result = match editing_id {
                    Some(id) => vm.update(&state, &id, form).await,
                    None => vm.create(&state, form).await,
                };

                match result {
                    Ok(()) => {
                        state.set_car_modal(None);
                        state.notify_subscribers();
                    }
                    Err(e) => alert(&format!("Failed to save car: {}", e)),
                }
            });
        })?;
    }
    append_child(&actions, &save_btn)?;

    append_child(&modal_el, &actions)?;
    append_child(&overlay, &modal_el)?;
    Ok(overlay)
}
