// ============================================================================
// LOADS VIEWMODEL - Operaciones CRUD sobre la colección "loads"
// ============================================================================
// volume/price se parsean a número para el payload; la representación que
// devuelve el backend (strings) se almacena tal cual. Ver DESIGN.md.
// ============================================================================

use crate::models::{Load, LoadPayload};
use crate::services::RecordClient;
use crate::state::AppState;
use crate::utils::constants::COLLECTION_LOADS;

/// Campos del formulario de carga, todos como texto (estado de inputs)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoadForm {
    pub name: String,
    pub volume: String,
    pub price: String,
    pub user: String,
    pub car: String,
    pub from_loc: String,
    pub to_loc: String,
    pub payment_method: String,
}

impl LoadForm {
    /// Normalizar a payload: volume y price a número. Falla antes de la red.
    pub fn normalize(&self) -> Result<LoadPayload, String> {
        let volume: f64 = self
            .volume
            .trim()
            .parse()
            .map_err(|_| format!("Invalid volume: {}", self.volume))?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("Invalid price: {}", self.price))?;

        Ok(LoadPayload {
            name: self.name.clone(),
            volume,
            price,
            user: self.user.clone(),
            car: self.car.clone(),
            from_loc: self.from_loc.clone(),
            to_loc: self.to_loc.clone(),
            payment_method: self.payment_method.clone(),
        })
    }

    /// Prellenar el formulario desde un registro existente (modal de edición)
    pub fn from_load(load: &Load) -> Self {
        Self {
            name: load.name.clone(),
            volume: load.volume.clone(),
            price: load.price.clone(),
            user: load.user.clone(),
            car: load.car.clone(),
            from_loc: load.from_loc.clone(),
            to_loc: load.to_loc.clone(),
            payment_method: load.payment_method.clone(),
        }
    }
}

/// ViewModel de cargas
pub struct LoadsViewModel {
    client: RecordClient,
}

impl LoadsViewModel {
    pub fn new() -> Self {
        Self {
            client: RecordClient::new(),
        }
    }

    /// Fetch de todas las cargas: reemplazo total de la lista
    pub async fn fetch_all(&self, state: &AppState) {
        state.loads.set_loading(true);
        state.loads.set_error(None);
        state.notify_subscribers();

        match self.client.fetch_all::<Load>(COLLECTION_LOADS).await {
            Ok(items) => {
                log::info!("📋 Cargas recibidas: {}", items.len());
                state.loads.set_list(items);
                state.loads.set_loading(false);
            }
            Err(e) => {
                log::error!("❌ Error obteniendo cargas: {}", e);
                state.loads.set_loading(false);
                state.loads.set_error(Some(e));
            }
        }

        state.notify_subscribers();
    }

    /// Crear carga: append del registro devuelto por el backend
    pub async fn create(&self, state: &AppState, form: LoadForm) -> Result<(), String> {
        let payload = form.normalize()?;
        log::info!("📡 Enviando carga: {}", payload.name);

        state.loads.set_loading(true);
        state.notify_subscribers();

        let result = self
            .client
            .create::<Load, _>(COLLECTION_LOADS, &payload)
            .await;
        state.loads.set_loading(false);

        let outcome = match result {
            Ok(load) => {
                log::info!("✅ Carga creada: {}", load.id);
                state.loads.push_load(load);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error creando carga: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }

    /// Actualizar carga: reemplazo in-place por id (id ausente = descarte)
    pub async fn update(&self, state: &AppState, id: &str, form: LoadForm) -> Result<(), String> {
        let payload = form.normalize()?;

        state.loads.set_loading(true);
        state.notify_subscribers();

        let result = self
            .client
            .update::<Load, _>(COLLECTION_LOADS, id, &payload)
            .await;
        state.loads.set_loading(false);

        let outcome = match result {
            Ok(load) => {
                log::info!("✅ Carga actualizada: {}", load.id);
                state.loads.replace_load(load);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error actualizando carga: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }

    /// Eliminar carga tras confirmación del servidor
    pub async fn delete(&self, state: &AppState, id: &str) -> Result<(), String> {
        log::info!("🗑️ Eliminando carga: {}", id);

        state.loads.set_loading(true);
        state.notify_subscribers();

        let result = self.client.delete(COLLECTION_LOADS, id).await;
        state.loads.set_loading(false);

        let outcome = match result {
            Ok(deleted_id) => {
                state.loads.remove_load(&deleted_id);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error eliminando carga: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }
}

impl Default for LoadsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LoadForm {
        LoadForm {
            name: "L1".into(),
            volume: "5".into(),
            price: "100".into(),
            user: "u1".into(),
            car: "c1".into(),
            from_loc: "loc1".into(),
            to_loc: "loc2".into(),
            payment_method: "cash".into(),
        }
    }

    #[test]
    fn test_normalize_parses_volume_and_price_to_numbers() {
        let payload = form().normalize().unwrap();
        assert_eq!(payload.volume, 5.0);
        assert_eq!(payload.price, 100.0);
    }

    #[test]
    fn test_normalize_rejects_non_numeric_fields() {
        let mut f = form();
        f.price = "cien".into();
        assert!(f.normalize().unwrap_err().contains("price"));

        let mut f = form();
        f.volume = String::new();
        assert!(f.normalize().is_err());
    }

    #[test]
    fn test_from_load_keeps_string_representation() {
        // El registro guarda strings; el formulario los muestra tal cual y
        // normalize los vuelve números solo al enviar
        let load: Load = serde_json::from_str(
            r#"{"id": "l1", "name": "L1", "volume": "5", "price": "100",
                "user": "u1", "car": "c1", "fromLoc": "a", "toLoc": "b",
                "paymentMethod": "cash"}"#,
        )
        .unwrap();

        let f = LoadForm::from_load(&load);
        assert_eq!(f.volume, "5");
        assert_eq!(f.price, "100");

        let payload = f.normalize().unwrap();
        assert_eq!(payload.volume, 5.0);
        assert_eq!(payload.price, 100.0);
    }
}
