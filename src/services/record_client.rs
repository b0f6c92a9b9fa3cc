// ============================================================================
// RECORD CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Traduce operaciones lógicas (fetch-all, create, update, delete) sobre una
// colección nombrada a requests HTTP contra el backend de registros:
//   {base}/api/collections/{collection}/records[/{id}]
// NO tiene lógica de negocio, solo hace requests HTTP.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::utils::constants::BACKEND_URL;

/// Cliente de registros - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct RecordClient {
    base_url: String,
}

impl RecordClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{}/records", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/api/collections/{}/records/{}", self.base_url, collection, id)
    }

    /// Listar todos los registros de una colección.
    /// El backend envuelve la lista como {"items": [...]}.
    pub async fn fetch_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, String> {
        let url = self.records_url(collection);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        let list = response
            .json::<ListResponse<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(list.items)
    }

    /// Crear un registro; devuelve la entidad creada por el backend
    pub async fn create<T, B>(&self, collection: &str, payload: &B) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.records_url(collection);
        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Actualizar un registro por id; devuelve la entidad actualizada
    pub async fn update<T, B>(&self, collection: &str, id: &str, payload: &B) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.record_url(collection, id);
        let response = Request::patch(&url)
            .json(payload)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Eliminar un registro por id. El backend no devuelve body: se devuelve
    /// el id para que el store elimine el elemento local.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<String, String> {
        let url = self.record_url(collection, id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        Ok(id.to_string())
    }

    /// Login contra la colección users (auth-with-password)
    pub async fn auth_with_password(
        &self,
        identity: &str,
        password: &str,
    ) -> Result<AuthResponse, String> {
        let url = format!(
            "{}/api/collections/users/auth-with-password",
            self.base_url
        );
        let request = AuthRequest {
            identity: identity.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Autenticando usuario: {}", identity);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for RecordClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extraer el mensaje de error de una respuesta no-2xx: el payload de error
/// del backend si viene, o el status HTTP como fallback
async fn read_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => parse_error_body(status, &body),
        Err(_) => format!("HTTP {}", status),
    }
}

fn parse_error_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ => format!("HTTP {}", status),
    }
}

#[derive(Deserialize)]
struct ListResponse<T> {
    items: Vec<T>,
}

/// Formato de error del backend: {"code": ..., "message": ..., "data": ...}
#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct AuthRequest {
    identity: String,
    password: String,
}

#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub record: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Car;

    #[test]
    fn test_records_urls() {
        let client = RecordClient::with_base_url("http://localhost:8090");
        assert_eq!(
            client.records_url("cars"),
            "http://localhost:8090/api/collections/cars/records"
        );
        assert_eq!(
            client.record_url("loads", "l1"),
            "http://localhost:8090/api/collections/loads/records/l1"
        );
    }

    #[test]
    fn test_list_envelope_unwraps_items() {
        let json = r#"{
            "page": 1,
            "perPage": 30,
            "totalItems": 1,
            "items": [{"id": "c1", "name": "Truck A", "volume": 10}]
        }"#;
        let list: ListResponse<Car> = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, "c1");
    }

    #[test]
    fn test_parse_error_body_prefers_backend_message() {
        let body = r#"{"code": 400, "message": "Failed to authenticate.", "data": {}}"#;
        assert_eq!(parse_error_body(400, body), "Failed to authenticate.");
    }

    #[test]
    fn test_parse_error_body_falls_back_to_status() {
        assert_eq!(parse_error_body(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(parse_error_body(404, r#"{"code": 404}"#), "HTTP 404");
    }
}
