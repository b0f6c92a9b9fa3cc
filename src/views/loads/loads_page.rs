// ============================================================================
// LOADS PAGE - Tabla de cargas con alta/edición/borrado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, confirm, on_click, ElementBuilder};
use crate::models::Load;
use crate::state::{AppState, LoadModal};
use crate::viewmodels::LoadsViewModel;

/// Renderizar la página de cargas
pub fn render_loads_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page").build();

    let toolbar = ElementBuilder::new("div")?.class("page-toolbar").build();
    let title = ElementBuilder::new("h2")?.text("Loads").build();
    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("+ Add load")
        .build();
    {
        let state = state.clone();
        on_click(&add_btn, move |_| {
            state.set_load_modal(Some(LoadModal::Add));
            state.notify_subscribers();
        })?;
    }
    append_child(&toolbar, &title)?;
    append_child(&toolbar, &add_btn)?;
    append_child(&page, &toolbar)?;

    if state.loads.get_loading() {
        let status = ElementBuilder::new("p")?
            .class("page-status")
            .text("Loading...")
            .build();
        append_child(&page, &status)?;
    }

    if let Some(error) = state.loads.get_error() {
        let error_el = ElementBuilder::new("p")?
            .class("page-error")
            .text(&error)
            .build();
        append_child(&page, &error_el)?;
    }

    let loads = state.loads.get_list();
    if loads.is_empty() && !state.loads.get_loading() {
        let empty = ElementBuilder::new("p")?
            .class("page-status")
            .text("No loads yet")
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let table = ElementBuilder::new("table")?.class("records-table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for column in ["Name", "Volume", "Price", "From", "To", "Payment", ""] {
        let th = ElementBuilder::new("th")?.text(column).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for load in &loads {
        let row = render_load_row(state, load)?;
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(&page, &table)?;

    Ok(page)
}

fn render_load_row(state: &AppState, load: &Load) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    // volume/price se muestran tal cual llegan del backend (strings)
    let cells = [
        load.name.as_str(),
        load.volume.as_str(),
        load.price.as_str(),
        load.from_loc.as_str(),
        load.to_loc.as_str(),
        load.payment_method.as_str(),
    ];
    for cell in cells {
        let td = ElementBuilder::new("td")?.text(cell).build();
        append_child(&row, &td)?;
    }

    let actions = ElementBuilder::new("td")?.class("row-actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Edit")
        .build();
    {
        let state = state.clone();
        let load = load.clone();
        on_click(&edit_btn, move |_| {
            state.set_load_modal(Some(LoadModal::Edit(load.clone())));
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
        let id = load.id.clone();
        let name = load.name.clone();
        on_click(&delete_btn, move |_| {
            if !confirm(&format!("Delete load \"{}\"?", name)) {
                return;
            }
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(e) = LoadsViewModel::new().delete(&state, &id).await {
                    alert(&format!("Failed to delete load: {}", e));
                }
            });
        })?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&row, &actions)?;
    Ok(row)
}
