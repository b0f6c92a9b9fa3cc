// ============================================================================
// CARS PAGE - Tabla de vehículos con alta/edición/borrado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, confirm, on_click, ElementBuilder};
use crate::models::Car;
use crate::state::{AppState, CarModal};
use crate::viewmodels::CarsViewModel;

/// Renderizar la página de vehículos
pub fn render_cars_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page").build();

    // Toolbar: título + botón de alta
    let toolbar = ElementBuilder::new("div")?.class("page-toolbar").build();
    let title = ElementBuilder::new("h2")?.text("Cars").build();
    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("+ Add car")
        .build();
    {
        let state = state.clone();
        on_click(&add_btn, move |_| {
            state.set_car_modal(Some(CarModal::Add));
            state.notify_subscribers();
        })?;
    }
    append_child(&toolbar, &title)?;
    append_child(&toolbar, &add_btn)?;
    append_child(&page, &toolbar)?;

    if state.cars.get_loading() {
        let status = ElementBuilder::new("p")?
            .class("page-status")
            .text("Loading...")
            .build();
        append_child(&page, &status)?;
    }

    // Error del último fetch (solo fetch persiste error en el store)
    if let Some(error) = state.cars.get_error() {
        let error_el = ElementBuilder::new("p")?
            .class("page-error")
            .text(&error)
            .build();
        append_child(&page, &error_el)?;
    }

    let cars = state.cars.get_list();
    if cars.is_empty() && !state.cars.get_loading() {
        let empty = ElementBuilder::new("p")?
            .class("page-status")
            .text("No cars yet")
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    // Tabla (orden = orden de respuesta del backend)
    let table = ElementBuilder::new("table")?.class("records-table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for column in ["Name", "Model", "Type", "Number", "Volume", "From", "To", ""] {
        let th = ElementBuilder::new("th")?.text(column).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for car in &cars {
        let row = render_car_row(state, car)?;
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(&page, &table)?;

    Ok(page)
}

fn render_car_row(state: &AppState, car: &Car) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    let cells = [
        car.name.as_str(),
        car.model.as_str(),
        car.car_type.as_str(),
        car.car_number.as_str(),
    ];
    for cell in cells {
        let td = ElementBuilder::new("td")?.text(cell).build();
        append_child(&row, &td)?;
    }
    let volume_td = ElementBuilder::new("td")?
        .text(&car.volume.to_string())
        .build();
    append_child(&row, &volume_td)?;
    for cell in [car.from.as_str(), car.to.as_str()] {
        let td = ElementBuilder::new("td")?.text(cell).build();
        append_child(&row, &td)?;
    }

    // Acciones
    let actions = ElementBuilder::new("td")?.class("row-actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Edit")
        .build();
    {
        let state = state.clone();
        let car = car.clone();
        on_click(&edit_btn, move |_| {
            state.set_car_modal(Some(CarModal::Edit(car.clone())));
            state.notify_subscribers();
        })?;
    }
    append_child(&actions, &edit_btn)?;

    let delete_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-danger")
        .text("Delete")
        .build();
    {
        let state = state.clone();
        let id = car.id.clone();
        let name = car.name.clone();
        on_click(&delete_btn, move |_| {
            if !confirm(&format!("Delete car \"{}\"?", name)) {
                return;
            }
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(e) = CarsViewModel::new().delete(&state, &id).await {
                    alert(&format!("Failed to delete car: {}", e));
                }
            });
        })?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&row, &actions)?;
    Ok(row)
}
