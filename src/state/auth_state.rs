// ============================================================================
// AUTH STATE - Estado de sesión (usuario + token)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

/// Estado de autenticación. El token es la única credencial; su presencia es
/// la única señal de protección de rutas. Invariante (best effort): token
/// no vacío siempre que user esté presente.
#[derive(Clone)]
pub struct AuthState {
    pub user: Rc<RefCell<Option<User>>>,
    pub token: Rc<RefCell<Option<String>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some()
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

    /// Limpiar sesión en memoria (el viewmodel elimina además el token
    /// persistido; aquí no se toca storage)
    pub fn clear_session(&self) {
        self.set_user(None);
        self.set_token(None);
        self.set_error(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: &str) -> User {
        serde_json::from_str(&format!(r#"{{"id": "{}", "email": "a@b.co"}}"#, id)).unwrap()
    }

    #[test]
    fn test_clear_session_removes_user_and_token() {
        let state = AuthState::new();
        state.set_user(Some(test_user("u1")));
        state.set_token(Some("tok123".to_string()));

        state.clear_session();

        assert!(state.get_user().is_none());
        assert!(state.get_token().is_none());
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_failed_login_keeps_previous_token() {
        // Login fallido: solo cambia error/loading, el token no se toca
        let state = AuthState::new();
        state.set_token(Some("old-token".to_string()));

        state.set_loading(true);
        state.set_error(None);
        // ... rejected
        state.set_loading(false);
        state.set_error(Some("Failed to authenticate.".to_string()));

        assert_eq!(state.get_token().as_deref(), Some("old-token"));
        assert_eq!(state.get_error().as_deref(), Some("Failed to authenticate."));
        assert!(!state.get_loading());
    }

    #[test]
    fn test_loading_flag_transitions() {
        let state = AuthState::new();
        assert!(!state.get_loading());
        state.set_loading(true);
        assert!(state.get_loading());
        state.set_loading(false);
        assert!(!state.get_loading());
    }
}
