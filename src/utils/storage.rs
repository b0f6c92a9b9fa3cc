// ============================================================================
// STORAGE - Persistencia del token de sesión en localStorage
// ============================================================================
// El token es el único estado durable entre reinicios. Se guarda como string
// plano (sin JSON) bajo TOKEN_STORAGE_KEY.
// ============================================================================

use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_STORAGE_KEY;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer el token persistido (None si no hay sesión guardada)
pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

/// Persistir el token de sesión
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "Error guardando token en localStorage".to_string())?;
    Ok(())
}

/// Eliminar el token persistido (logout)
pub fn remove_token() -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(TOKEN_STORAGE_KEY)
        .map_err(|_| "Error eliminando token de localStorage".to_string())?;
    Ok(())
}

// Requieren un localStorage real: correr con `wasm-pack test --headless`
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trip() {
        save_token("abc123").unwrap();
        assert_eq!(load_token(), Some("abc123".to_string()));

        remove_token().unwrap();
        assert_eq!(load_token(), None);
    }

    #[wasm_bindgen_test]
    fn test_save_overwrites_previous_token() {
        save_token("old").unwrap();
        save_token("new").unwrap();
        assert_eq!(load_token(), Some("new".to_string()));

        remove_token().unwrap();
    }
}
