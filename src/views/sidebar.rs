// ============================================================================
// SIDEBAR - Navegación principal (solo con sesión activa)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{AuthViewModel, CarsViewModel, LoadsViewModel};

/// Renderizar la barra lateral con navegación y logout
pub fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();

    let brand = ElementBuilder::new("div")?
        .class("sidebar-brand")
        .text("🚚 Freight Admin")
        .build();
    append_child(&sidebar, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();

    // Botón Cars
    let cars_class = if state.get_route() == Route::Cars {
        "nav-item active"
    } else {
        "nav-item"
    };
    let cars_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(cars_class)
        .text("Cars")
        .build();
    {
        let state = state.clone();
        on_click(&cars_btn, move |_| {
            state.set_route(Route::Cars);
            let state = state.clone();
            // Cada navegación refresca la lista desde el backend
            spawn_local(async move {
                CarsViewModel::new().fetch_all(&state).await;
            });
        })?;
    }
    append_child(&nav, &cars_btn)?;

    // Botón Loads
    let loads_class = if state.get_route() == Route::Loads {
        "nav-item active"
    } else {
        "nav-item"
    };
    let loads_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(loads_class)
        .text("Loads")
        .build();
    {
        let state = state.clone();
        on_click(&loads_btn, move |_| {
            state.set_route(Route::Loads);
            let state = state.clone();
            spawn_local(async move {
                LoadsViewModel::new().fetch_all(&state).await;
            });
        })?;
    }
    append_child(&nav, &loads_btn)?;

    append_child(&sidebar, &nav)?;

    // Logout: local, sin llamada al servidor
    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("nav-item btn-logout")
        .text("Log out")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            AuthViewModel::new().logout(&state);
        })?;
    }
    append_child(&sidebar, &logout_btn)?;

    Ok(sidebar)
}
