// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Compone los tres stores (auth, cars, loads) más el estado de UI (ruta y
// modales). Es la única fuente de verdad que consumen las vistas: las vistas
// solo leen a través de los getters y mutan a través de los viewmodels o de
// los setters declarados aquí.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Car, Load};
use crate::state::{AuthState, CarsState, LoadsState};
use crate::utils::storage;

/// Rutas de la aplicación. La presencia del token es la única señal de
/// protección: sin token solo Login/Register, con token Cars/Loads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    Register,
    Cars,
    Loads,
}

/// Ruta inicial según presencia de token persistido
pub fn initial_route(has_token: bool) -> Route {
    if has_token {
        Route::Cars
    } else {
        Route::Login
    }
}

/// Modal de alta/edición de vehículo
#[derive(Clone, PartialEq, Debug)]
pub enum CarModal {
    Add,
    Edit(Car),
}

/// Modal de alta/edición de carga
#[derive(Clone, PartialEq, Debug)]
pub enum LoadModal {
    Add,
    Edit(Load),
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub cars: CarsState,
    pub loads: LoadsState,

    // UI State
    pub route: Rc<RefCell<Route>>,
    pub car_modal: Rc<RefCell<Option<CarModal>>>,
    pub load_modal: Rc<RefCell<Option<LoadModal>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear el estado global, sembrando el token desde localStorage
    /// (se lee una sola vez al arrancar)
    pub fn new() -> Self {
        let auth = AuthState::new();
        if let Some(token) = storage::load_token() {
            log::info!("💾 Token encontrado en localStorage, restaurando sesión");
            auth.set_token(Some(token));
        }

        let route = initial_route(auth.is_logged_in());

        Self {
            auth,
            cars: CarsState::new(),
            loads: LoadsState::new(),
            route: Rc::new(RefCell::new(route)),
            car_modal: Rc::new(RefCell::new(None)),
            load_modal: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn get_car_modal(&self) -> Option<CarModal> {
        self.car_modal.borrow().clone()
    }

    pub fn set_car_modal(&self, modal: Option<CarModal>) {
        *self.car_modal.borrow_mut() = modal;
    }

    pub fn get_load_modal(&self) -> Option<LoadModal> {
        self.load_modal.borrow().clone()
    }

    pub fn set_load_modal(&self, modal: Option<LoadModal>) {
        *self.load_modal.borrow_mut() = modal;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (dispara el re-render)
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_route_depends_on_token_presence() {
        assert_eq!(initial_route(true), Route::Cars);
        assert_eq!(initial_route(false), Route::Login);
    }
}
