// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, CarModal, LoadModal};
use crate::viewmodels::CarsViewModel;
use crate::views::render_app;

type ModalSnapshot = (Option<CarModal>, Option<LoadModal>);

/// Aplicación principal: estado global + nodo raíz
pub struct App {
    state: AppState,
    root: Element,
    rendered_modals: RefCell<ModalSnapshot>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Con token persistido la ruta inicial es cars: cargar la lista
        if state.auth.is_logged_in() {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                CarsViewModel::new().fetch_all(&state_clone).await;
            });
        }

        // Re-render automático ante cambios de estado, batcheado con un
        // timeout de 0ms para coalescer notificaciones consecutivas
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root,
            rendered_modals: RefCell::new((None, None)),
        })
    }

    /// Re-render completo del árbol bajo #app. Mientras un modal abierto no
    /// cambia, el re-render se suprime: los inputs se recrean desde el valor
    /// inicial en cada render y pisarían lo que el usuario está escribiendo
    /// (p.ej. un fetch que resuelve con el modal abierto).
    pub fn render(&self) -> Result<(), JsValue> {
        let modals = (self.state.get_car_modal(), self.state.get_load_modal());
        if rerender_suppressed(&self.rendered_modals.borrow(), &modals) {
            return Ok(());
        }
        *self.rendered_modals.borrow_mut() = modals;

        set_inner_html(&self.root, "");
        let app_el = render_app(&self.state)?;
        append_child(&self.root, &app_el)?;
        Ok(())
    }
}

/// true si hay un modal abierto y es el mismo que ya está renderizado
fn rerender_suppressed(rendered: &ModalSnapshot, current: &ModalSnapshot) -> bool {
    let modal_open = current.0.is_some() || current.1.is_some();
    modal_open && rendered == current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Car;

    fn car(id: &str) -> Car {
        serde_json::from_str(&format!(r#"{{"id": "{}", "name": "A"}}"#, id)).unwrap()
    }

    #[test]
    fn test_no_modal_never_suppresses() {
        let none: ModalSnapshot = (None, None);
        assert!(!rerender_suppressed(&none, &none));
    }

    #[test]
    fn test_unchanged_open_modal_suppresses() {
        let open: ModalSnapshot = (Some(CarModal::Edit(car("c1"))), None);
        assert!(rerender_suppressed(&open.clone(), &open));
    }

    #[test]
    fn test_modal_transitions_render() {
        let none: ModalSnapshot = (None, None);
        let add: ModalSnapshot = (Some(CarModal::Add), None);
        let edit: ModalSnapshot = (Some(CarModal::Edit(car("c1"))), None);

        // Apertura, cambio de modal y cierre disparan render
        assert!(!rerender_suppressed(&none, &add));
        assert!(!rerender_suppressed(&add, &edit));
        assert!(!rerender_suppressed(&edit, &none));
    }
}
