// ============================================================================
// LOADS STATE - Colección en memoria de cargas + flags de operación
// ============================================================================
// Mismo ciclo de vida que CarsState, sobre entidades Load. Ojo: un registro
// recién creado (devuelto por el POST) y uno obtenido por fetch pueden
// diferir en la representación de volume/price (contrato heredado).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Load;

#[derive(Clone)]
pub struct LoadsState {
    pub list: Rc<RefCell<Vec<Load>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl LoadsState {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_list(&self) -> Vec<Load> {
        self.list.borrow().clone()
    }

    /// Reemplazo total de la lista (fetch fulfilled). No se reordena.
    pub fn set_list(&self, loads: Vec<Load>) {
        *self.list.borrow_mut() = loads;
    }

    /// Append del registro creado (create fulfilled)
    pub fn push_load(&self, load: Load) {
        self.list.borrow_mut().push(load);
    }

    /// Reemplazo in-place por id (update fulfilled); id ausente = no-op
    pub fn replace_load(&self, load: Load) {
        let mut list = self.list.borrow_mut();
        if let Some(index) = list.iter().position(|l| l.id == load.id) {
            list[index] = load;
        }
    }

    /// Filtrado por id (delete fulfilled)
    pub fn remove_load(&self, id: &str) {
        self.list.borrow_mut().retain(|l| l.id != id);
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

impl Default for LoadsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(id: &str, name: &str) -> Load {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "name": "{}", "volume": "5", "price": "100"}}"#,
            id, name
        ))
        .unwrap()
    }

    #[test]
    fn test_create_scenario_appends_backend_entity() {
        // create con {name:"L1", volume:"5", price:"100", ...} devuelve {id:"l1", ...}
        let state = LoadsState::new();
        state.set_list(vec![load("l0", "existing")]);

        let created = load("l1", "L1");
        state.push_load(created.clone());

        let list = state.get_list();
        assert_eq!(list.len(), 2);
        assert_eq!(*list.last().unwrap(), created);
    }

    #[test]
    fn test_fetch_replaces_wholesale() {
        let state = LoadsState::new();
        state.set_list(vec![load("stale", "stale")]);

        state.set_list(vec![load("l1", "A"), load("l2", "B")]);

        let ids: Vec<String> = state.get_list().iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, vec!["l1", "l2"]);
    }

    #[test]
    fn test_update_in_place_and_unknown_id_noop() {
        let state = LoadsState::new();
        state.set_list(vec![load("l1", "A"), load("l2", "B")]);

        state.replace_load(load("l1", "A2"));
        state.replace_load(load("l9", "ghost"));

        let list = state.get_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "A2");
        assert_eq!(list[1].name, "B");
    }

    #[test]
    fn test_delete_filters_by_id_only() {
        let state = LoadsState::new();
        state.set_list(vec![load("l1", "A"), load("l2", "B"), load("l3", "C")]);

        state.remove_load("l1");

        let ids: Vec<String> = state.get_list().iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, vec!["l2", "l3"]);
    }

    #[test]
    fn test_string_encoded_numbers_stored_as_is() {
        // volume/price llegan como strings del backend y se guardan tal cual
        let fetched: Load =
            serde_json::from_str(r#"{"id": "l1", "name": "A", "volume": "5", "price": "100"}"#)
                .unwrap();
        let state = LoadsState::new();
        state.set_list(vec![fetched]);

        assert_eq!(state.get_list()[0].volume, "5");
        assert_eq!(state.get_list()[0].price, "100");
    }
}
