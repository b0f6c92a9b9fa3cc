// ============================================================================
// APP VIEW - Composición raíz según la ruta actual
// ============================================================================
// La presencia del token es la única protección de ruta: sin token solo se
// renderizan login/registro; con token, sidebar + página actual + modales.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Route};
use crate::views::auth::{render_login, render_register};
use crate::views::cars::{render_car_modal, render_cars_page};
use crate::views::loads::{render_load_modal, render_loads_page};
use crate::views::sidebar::render_sidebar;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();

    // Guard de ruta: token ausente fuerza las pantallas de auth
    let route = if state.auth.is_logged_in() {
        match state.get_route() {
            Route::Login | Route::Register => Route::Cars,
            route => route,
        }
    } else {
        match state.get_route() {
            Route::Register => Route::Register,
            _ => Route::Login,
        }
    };

    match route {
        Route::Login => {
            let login = render_login(state)?;
            append_child(&container, &login)?;
        }
        Route::Register => {
            let register = render_register(state)?;
            append_child(&container, &register)?;
        }
        Route::Cars | Route::Loads => {
            let layout = ElementBuilder::new("div")?.class("layout").build();

            let sidebar = render_sidebar(state)?;
            append_child(&layout, &sidebar)?;

            let content = ElementBuilder::new("main")?.class("content").build();
            let page = match route {
                Route::Cars => render_cars_page(state)?,
                _ => render_loads_page(state)?,
            };
            append_child(&content, &page)?;
            append_child(&layout, &content)?;

            append_child(&container, &layout)?;

            // Modales por encima del layout
            if let Some(modal) = state.get_car_modal() {
                let modal_el = render_car_modal(state, &modal)?;
                append_child(&container, &modal_el)?;
            }
            if let Some(modal) = state.get_load_modal() {
                let modal_el = render_load_modal(state, &modal)?;
                append_child(&container, &modal_el)?;
            }
        }
    }

    Ok(container)
}
