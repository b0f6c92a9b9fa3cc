// ============================================================================
// AUTH VIEWMODEL - Lógica de sesión (login / registro / logout)
// ============================================================================
// Cada operación async transita: pending (loading=true, error=None) →
// fulfilled (estado actualizado) | rejected (error=mensaje). Las vistas solo
// llaman estas operaciones, nunca mutan el estado directamente.
// ============================================================================

use serde::Serialize;

use crate::services::RecordClient;
use crate::state::{AppState, Route};
use crate::utils::constants::COLLECTION_USERS;
use crate::utils::storage;

/// Datos del formulario de registro
#[derive(Clone, PartialEq, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Payload de registro con los campos constantes que exige el backend
#[derive(Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
    #[serde(rename = "emailVisibility")]
    pub email_visibility: bool,
    pub role: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isPaid")]
    pub is_paid: bool,
    pub name: String,
}

impl RegisterForm {
    /// Construir el payload fijo de registro: visibilidad de email activada,
    /// rol por defecto "driver", activo, no pagado, nombre opcional ("" si falta)
    pub fn into_payload(self) -> RegisterPayload {
        RegisterPayload {
            email: self.email,
            password: self.password,
            password_confirm: self.password_confirm,
            email_visibility: true,
            role: "driver".to_string(),
            is_active: true,
            is_paid: false,
            name: self.name,
        }
    }
}

/// ViewModel de autenticación
pub struct AuthViewModel {
    client: RecordClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            client: RecordClient::new(),
        }
    }

    /// Login con email + password. En fulfilled guarda {user, token} y
    /// persiste el token; en rejected deja el mensaje en error (el token
    /// previo no se toca).
    pub async fn login(&self, state: &AppState, email: String, password: String) {
        state.auth.set_loading(true);
        state.auth.set_error(None);
        state.notify_subscribers();

        match self.client.auth_with_password(&email, &password).await {
            Ok(response) => {
                log::info!("✅ Login correcto: {}", email);
                state.auth.set_user(Some(response.record));
                state.auth.set_token(Some(response.token.clone()));
                if let Err(e) = storage::save_token(&response.token) {
                    log::warn!("⚠️ No se pudo persistir el token: {}", e);
                }
                state.auth.set_loading(false);
                state.set_route(Route::Cars);
            }
            Err(e) => {
                log::error!("❌ Error de login: {}", e);
                state.auth.set_loading(false);
                state.auth.set_error(Some(e));
            }
        }

        state.notify_subscribers();
    }

    /// Registro de usuario. El backend normalmente NO devuelve token aquí:
    /// solo se establece sesión si lo incluyera (gap heredado del contrato,
    /// ver DESIGN.md). En el caso normal se vuelve a la pantalla de login.
    pub async fn register(&self, state: &AppState, form: RegisterForm) -> Result<(), String> {
        state.auth.set_loading(true);
        state.auth.set_error(None);
        state.notify_subscribers();

        let payload = form.into_payload();
        let result = self
            .client
            .create::<crate::models::User, _>(COLLECTION_USERS, &payload)
            .await;

        let outcome = match result {
            Ok(user) => {
                log::info!("✅ Usuario registrado: {}", user.email);
                let token = user.token.clone();
                state.auth.set_user(Some(user));
                if let Some(token) = token {
                    state.auth.set_token(Some(token.clone()));
                    if let Err(e) = storage::save_token(&token) {
                        log::warn!("⚠️ No se pudo persistir el token: {}", e);
                    }
                    state.set_route(Route::Cars);
                } else {
                    // Sin token el registro no inicia sesión: a login
                    state.set_route(Route::Login);
                }
                state.auth.set_loading(false);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error de registro: {}", e);
                state.auth.set_loading(false);
                state.auth.set_error(Some(e.clone()));
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }

    /// Logout: síncrono y solo local. Limpia user/token en memoria y elimina
    /// el token persistido. No hay llamada al servidor.
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 Logout");
        state.auth.clear_session();
        if let Err(e) = storage::remove_token() {
            log::warn!("⚠️ Error eliminando token persistido: {}", e);
        }
        state.set_route(Route::Login);
        state.notify_subscribers();
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_payload_carries_fixed_fields() {
        let form = RegisterForm {
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirm: "secret123".to_string(),
        };

        let value = serde_json::to_value(form.into_payload()).unwrap();
        assert_eq!(value["email"], "ali@example.com");
        assert_eq!(value["passwordConfirm"], "secret123");
        assert_eq!(value["emailVisibility"], true);
        assert_eq!(value["role"], "driver");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["isPaid"], false);
        assert_eq!(value["name"], "Ali");
    }

    #[test]
    fn test_register_payload_allows_empty_name() {
        let form = RegisterForm {
            name: String::new(),
            email: "x@y.z".to_string(),
            password: "p".to_string(),
            password_confirm: "p".to_string(),
        };
        let value = serde_json::to_value(form.into_payload()).unwrap();
        assert_eq!(value["name"], "");
    }
}
