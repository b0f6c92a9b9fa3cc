// ============================================================================
// CARS VIEWMODEL - Operaciones CRUD sobre la colección "cars"
// ============================================================================
// El formulario llega como campos de texto (location viene serializada como
// JSON). La normalización parsea location y coerciona volume a número antes
// de enviar; el registro devuelto por el backend es lo que entra a la lista.
// ============================================================================

use crate::models::{Car, CarPayload, Location};
use crate::services::RecordClient;
use crate::state::AppState;
use crate::utils::constants::COLLECTION_CARS;

/// Campos del formulario de vehículo, todos como texto (estado de inputs)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CarForm {
    pub name: String,
    pub volume: String,
    pub user: String,
    pub car_type: String,
    pub car_number: String,
    pub from: String,
    pub to: String,
    pub model: String,
    /// Coordenadas como texto JSON, p.ej. {"lat": 41.31, "lon": 69.24}
    pub location: String,
}

impl CarForm {
    /// Normalizar el formulario a un payload JSON plano: volume a número,
    /// location de texto JSON a objeto. Falla antes de tocar la red.
    pub fn normalize(&self) -> Result<CarPayload, String> {
        let volume: f64 = self
            .volume
            .trim()
            .parse()
            .map_err(|_| format!("Invalid volume: {}", self.volume))?;
        if volume.is_nan() || volume <= 0.0 {
            return Err("Please enter a valid volume".to_string());
        }

        if self.user.trim().is_empty() {
            return Err("User ID is required".to_string());
        }

        let location: Location = serde_json::from_str(&self.location)
            .map_err(|_| format!("Invalid location: {}", self.location))?;

        Ok(CarPayload {
            name: self.name.clone(),
            volume,
            user: self.user.clone(),
            car_type: self.car_type.clone(),
            car_number: self.car_number.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            model: self.model.clone(),
            location,
        })
    }

    /// Prellenar el formulario desde un registro existente (modal de edición)
    pub fn from_car(car: &Car) -> Self {
        Self {
            name: car.name.clone(),
            volume: car.volume.to_string(),
            user: car.user.clone(),
            car_type: car.car_type.clone(),
            car_number: car.car_number.clone(),
            from: car.from.clone(),
            to: car.to.clone(),
            model: car.model.clone(),
            location: serde_json::to_string(&car.location).unwrap_or_default(),
        }
    }
}

/// ViewModel de vehículos
pub struct CarsViewModel {
    client: RecordClient,
}

impl CarsViewModel {
    pub fn new() -> Self {
        Self {
            client: RecordClient::new(),
        }
    }

    /// Fetch de todos los vehículos: reemplazo total de la lista.
    /// El rechazo deja el mensaje en error (se limpia al siguiente intento).
    pub async fn fetch_all(&self, state: &AppState) {
        state.cars.set_loading(true);
        state.cars.set_error(None);
        state.notify_subscribers();

        match self.client.fetch_all::<Car>(COLLECTION_CARS).await {
            Ok(items) => {
                log::info!("📋 Vehículos recibidos: {}", items.len());
                state.cars.set_list(items);
                state.cars.set_loading(false);
            }
            Err(e) => {
                log::error!("❌ Error obteniendo vehículos: {}", e);
                state.cars.set_loading(false);
                state.cars.set_error(Some(e));
            }
        }

        state.notify_subscribers();
    }

    /// Crear vehículo: append del registro devuelto por el backend.
    /// Los errores se devuelven a la vista (alert), no se guardan en error.
    pub async fn create(&self, state: &AppState, form: CarForm) -> Result<(), String> {
        let payload = form.normalize()?;

        state.cars.set_loading(true);
        state.notify_subscribers();

        let result = self.client.create::<Car, _>(COLLECTION_CARS, &payload).await;
        state.cars.set_loading(false);

        let outcome = match result {
            Ok(car) => {
                log::info!("✅ Vehículo creado: {}", car.id);
                state.cars.push_car(car);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error creando vehículo: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }

    /// Actualizar vehículo: reemplazo completo de los campos editables.
    /// Si el id no está en la lista local el resultado se descarta (gap).
    pub async fn update(&self, state: &AppState, id: &str, form: CarForm) -> Result<(), String> {
        let payload = form.normalize()?;

        state.cars.set_loading(true);
        state.notify_subscribers();

        let result = self
            .client
            .update::<Car, _>(COLLECTION_CARS, id, &payload)
            .await;
        state.cars.set_loading(false);

        let outcome = match result {
            Ok(car) => {
                log::info!("✅ Vehículo actualizado: {}", car.id);
                state.cars.replace_car(car);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error actualizando vehículo: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }

    /// Eliminar vehículo: sin eliminación optimista, se quita de la lista
    /// solo tras la confirmación del servidor
    pub async fn delete(&self, state: &AppState, id: &str) -> Result<(), String> {
        log::info!("🗑️ Eliminando vehículo: {}", id);

        state.cars.set_loading(true);
        state.notify_subscribers();

        let result = self.client.delete(COLLECTION_CARS, id).await;
        state.cars.set_loading(false);

        let outcome = match result {
            Ok(deleted_id) => {
                state.cars.remove_car(&deleted_id);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error eliminando vehículo: {}", e);
                Err(e)
            }
        };

        state.notify_subscribers();
        outcome
    }
}

impl Default for CarsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CarForm {
        CarForm {
            name: "Truck A".into(),
            volume: "10".into(),
            user: "u1".into(),
            car_type: "tent".into(),
            car_number: "01A777BB".into(),
            from: "loc1".into(),
            to: "loc2".into(),
            model: "m9".into(),
            location: r#"{"lat": 41.31, "lon": 69.24}"#.into(),
        }
    }

    #[test]
    fn test_normalize_parses_location_and_coerces_volume() {
        let payload = form().normalize().unwrap();
        assert_eq!(payload.volume, 10.0);
        assert_eq!(payload.location.lat, 41.31);
        assert_eq!(payload.location.lon, 69.24);
        assert_eq!(payload.car_number, "01A777BB");
    }

    #[test]
    fn test_normalize_rejects_bad_volume() {
        let mut f = form();
        f.volume = "ten".into();
        let err = f.normalize().unwrap_err();
        assert!(err.contains("volume"));
    }

    #[test]
    fn test_normalize_rejects_nonpositive_volume() {
        // volume debe ser > 0: cero y negativos se bloquean antes de la red
        for bad in ["0", "-5", "NaN"] {
            let mut f = form();
            f.volume = bad.into();
            let err = f.normalize().unwrap_err();
            assert_eq!(err, "Please enter a valid volume");
        }
    }

    #[test]
    fn test_normalize_requires_user() {
        let mut f = form();
        f.user = "  ".into();
        let err = f.normalize().unwrap_err();
        assert_eq!(err, "User ID is required");
    }

    #[test]
    fn test_normalize_rejects_bad_location_json() {
        let mut f = form();
        f.location = "41.31,69.24".into();
        let err = f.normalize().unwrap_err();
        assert!(err.contains("location"));
    }

    #[test]
    fn test_from_car_round_trips_through_normalize() {
        let car: Car = serde_json::from_str(
            r#"{
                "id": "c1", "name": "Truck A", "model": "m9", "type": "tent",
                "carNumber": "01A777BB", "volume": 10, "from": "loc1",
                "to": "loc2", "user": "u1",
                "location": {"lat": 41.31, "lon": 69.24}
            }"#,
        )
        .unwrap();

        let payload = CarForm::from_car(&car).normalize().unwrap();
        assert_eq!(payload.name, car.name);
        assert_eq!(payload.volume, car.volume);
        assert_eq!(payload.location, car.location);
    }
}
