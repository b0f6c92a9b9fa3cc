// ============================================================================
// CARS STATE - Colección en memoria de vehículos + flags de operación
// ============================================================================
// Ciclo de vida de la lista:
// - fetch: reemplazo total (orden = orden de respuesta del backend)
// - create: append del registro devuelto
// - update: reemplazo in-place por id (id ausente = no-op silencioso)
// - delete: filtrado por id
// La identidad de una entidad es únicamente su id asignado por el backend.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Car;

#[derive(Clone)]
pub struct CarsState {
    pub list: Rc<RefCell<Vec<Car>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl CarsState {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_list(&self) -> Vec<Car> {
        self.list.borrow().clone()
    }

    /// Reemplazo total de la lista (fetch fulfilled). No se reordena.
    pub fn set_list(&self, cars: Vec<Car>) {
        *self.list.borrow_mut() = cars;
    }

    /// Append del registro creado (create fulfilled)
    pub fn push_car(&self, car: Car) {
        self.list.borrow_mut().push(car);
    }

    /// Reemplazo in-place por id (update fulfilled). Si el id no está en la
    /// lista local, el update se descarta silenciosamente: el estado queda
    /// inconsistente con el backend hasta el próximo fetch (gap conocido).
    pub fn replace_car(&self, car: Car) {
        let mut list = self.list.borrow_mut();
        if let Some(index) = list.iter().position(|c| c.id == car.id) {
            list[index] = car;
        }
    }

    /// Filtrado por id (delete fulfilled)
    pub fn remove_car(&self, id: &str) {
        self.list.borrow_mut().retain(|c| c.id != id);
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }
}

impl Default for CarsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str, name: &str) -> Car {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "name": "{}", "volume": 10}}"#,
            id, name
        ))
        .unwrap()
    }

    #[test]
    fn test_fetch_replaces_list_preserving_backend_order() {
        let state = CarsState::new();
        state.set_list(vec![car("old", "Old")]);

        state.set_list(vec![car("c3", "C"), car("c1", "A"), car("c2", "B")]);

        let list = state.get_list();
        let ids: Vec<&str> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_create_appends_exactly_one() {
        let state = CarsState::new();
        state.set_list(vec![car("c1", "Truck A")]);

        state.push_car(car("c2", "Truck B"));

        let list = state.get_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list.last().unwrap().id, "c2");
        assert_eq!(list.last().unwrap().name, "Truck B");
    }

    #[test]
    fn test_update_replaces_in_place_others_untouched() {
        let state = CarsState::new();
        state.set_list(vec![car("c1", "A"), car("c2", "B"), car("c3", "C")]);

        state.replace_car(car("c2", "B-updated"));

        let list = state.get_list();
        assert_eq!(list[0].name, "A");
        assert_eq!(list[1].id, "c2");
        assert_eq!(list[1].name, "B-updated");
        assert_eq!(list[2].name, "C");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_update_unknown_id_is_silently_dropped() {
        let state = CarsState::new();
        state.set_list(vec![car("c1", "A")]);

        // El backend aceptó el update pero el id no está local: no-op, sin panic
        state.replace_car(car("c2", "ghost"));

        let list = state.get_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "A");
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let state = CarsState::new();
        state.set_list(vec![car("c1", "A"), car("c2", "B"), car("c3", "C")]);

        state.remove_car("c2");

        let ids: Vec<String> = state.get_list().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_fetch_scenario_from_items_envelope() {
        // fetch devuelve {items: [{id:"c1", name:"Truck A", volume:10}]}
        let state = CarsState::new();
        state.set_loading(true);
        state.set_error(None);

        let items: Vec<Car> =
            serde_json::from_str(r#"[{"id": "c1", "name": "Truck A", "volume": 10}]"#).unwrap();
        state.set_list(items);
        state.set_loading(false);

        let list = state.get_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "c1");
        assert_eq!(list[0].name, "Truck A");
        assert_eq!(list[0].volume, 10.0);
        assert!(!state.get_loading());
        assert!(state.get_error().is_none());
    }

    #[test]
    fn test_fetch_rejection_sets_error_and_next_attempt_clears_it() {
        let state = CarsState::new();

        state.set_loading(true);
        state.set_error(None);
        state.set_loading(false);
        state.set_error(Some("Network error: timeout".to_string()));
        assert!(state.get_error().is_some());

        // Siguiente intento de fetch limpia el error
        state.set_loading(true);
        state.set_error(None);
        assert!(state.get_error().is_none());
        assert!(state.get_loading());
    }
}
