// ============================================================================
// FREIGHT ADMIN - PANEL DE ADMINISTRACIÓN (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: operaciones async contra el backend + transiciones de estado
// - Services: SOLO comunicación HTTP (Record Client)
// - State: state management con Rc<RefCell> + notificaciones
// - Models: estructuras compartidas con el backend de registros
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia global de la app (thread_local: WASM es single-threaded)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚚 Freight Admin - arrancando");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app completa (la llaman los subscribers de estado)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando la app: {:?}", e);
            }
        }
    });
}
