use serde::{Deserialize, Serialize};

/// Coordenadas de un vehículo (campo JSON anidado en el backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Registro de vehículo tal como lo devuelve el backend.
/// id/created/updated los asigna el backend y son inmutables desde el cliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    #[serde(rename = "collectionId", default)]
    pub collection_id: String,
    #[serde(rename = "collectionName", default)]
    pub collection_name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "type", default)]
    pub car_type: String,
    #[serde(rename = "carNumber", default)]
    pub car_number: String,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub location: Location,
}

/// Payload de creación/actualización de un vehículo (solo campos editables)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarPayload {
    pub name: String,
    pub volume: f64,
    pub user: String,
    #[serde(rename = "type")]
    pub car_type: String,
    #[serde(rename = "carNumber")]
    pub car_number: String,
    pub from: String,
    pub to: String,
    pub model: String,
    pub location: Location,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_decodes_backend_record() {
        let json = r#"{
            "id": "c1",
            "collectionId": "abc123",
            "collectionName": "cars",
            "created": "2025-01-10 09:00:00.000Z",
            "updated": "2025-01-10 09:00:00.000Z",
            "name": "Truck A",
            "model": "m9",
            "type": "tent",
            "carNumber": "01A777BB",
            "volume": 10,
            "from": "loc1",
            "to": "loc2",
            "user": "u1",
            "location": {"lat": 41.31, "lon": 69.24}
        }"#;

        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "c1");
        assert_eq!(car.name, "Truck A");
        assert_eq!(car.car_type, "tent");
        assert_eq!(car.car_number, "01A777BB");
        assert_eq!(car.volume, 10.0);
        assert_eq!(car.location.lat, 41.31);
        assert_eq!(car.location.lon, 69.24);
    }

    #[test]
    fn test_car_tolerates_missing_optional_fields() {
        // Campos de relación vacíos y location ausente no deben romper el decode
        let json = r#"{"id": "c2", "name": "Truck B"}"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "c2");
        assert_eq!(car.volume, 0.0);
        assert!(car.from.is_empty());
        assert_eq!(car.location, Location::default());
    }

    #[test]
    fn test_car_payload_wire_names() {
        let payload = CarPayload {
            name: "Truck A".into(),
            volume: 10.0,
            user: "u1".into(),
            car_type: "ref".into(),
            car_number: "01A777BB".into(),
            from: "loc1".into(),
            to: "loc2".into(),
            model: "m9".into(),
            location: Location { lat: 1.0, lon: 2.0 },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "ref");
        assert_eq!(value["carNumber"], "01A777BB");
        assert_eq!(value["location"]["lat"], 1.0);
        // Los nombres rust no deben filtrarse al wire
        assert!(value.get("car_type").is_none());
        assert!(value.get("car_number").is_none());
    }
}
