use serde::{Deserialize, Serialize};

/// Registro de carga tal como lo devuelve el backend.
/// Nota: volume/price llegan como strings del backend aunque en el payload de
/// creación viajan como números. Inconsistencia heredada del contrato original,
/// se conserva tal cual (ver DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
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
    pub volume: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub car: String,
    #[serde(rename = "fromLoc", default)]
    pub from_loc: String,
    #[serde(rename = "toLoc", default)]
    pub to_loc: String,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub telegram: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "InAdvanceMethod", default)]
    pub in_advance_method: bool,
}

/// Payload de creación/actualización de una carga.
/// volume/price viajan como números (el backend los devuelve como strings).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadPayload {
    pub name: String,
    pub volume: f64,
    pub price: f64,
    pub user: String,
    pub car: String,
    #[serde(rename = "fromLoc")]
    pub from_loc: String,
    #[serde(rename = "toLoc")]
    pub to_loc: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_decodes_string_encoded_numbers() {
        let json = r#"{
            "id": "l1",
            "collectionId": "def456",
            "collectionName": "loads",
            "created": "2025-02-01 12:00:00.000Z",
            "updated": "2025-02-01 12:00:00.000Z",
            "name": "L1",
            "volume": "5",
            "price": "100",
            "user": "u1",
            "car": "c1",
            "fromLoc": "loc1",
            "toLoc": "loc2",
            "paymentMethod": "cash",
            "phoneNumber": "+998901234567",
            "telegram": "@driver",
            "date": "2025-02-03",
            "InAdvanceMethod": true
        }"#;

        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load.id, "l1");
        // El backend devuelve strings, se almacenan tal cual
        assert_eq!(load.volume, "5");
        assert_eq!(load.price, "100");
        assert_eq!(load.from_loc, "loc1");
        assert_eq!(load.to_loc, "loc2");
        assert!(load.in_advance_method);
    }

    #[test]
    fn test_load_payload_wire_names_and_numbers() {
        let payload = LoadPayload {
            name: "L1".into(),
            volume: 5.0,
            price: 100.0,
            user: "u1".into(),
            car: "c1".into(),
            from_loc: "loc1".into(),
            to_loc: "loc2".into(),
            payment_method: "cash".into(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        // Números en el payload de creación (no strings)
        assert!(value["volume"].is_f64() || value["volume"].is_u64());
        assert_eq!(value["fromLoc"], "loc1");
        assert_eq!(value["toLoc"], "loc2");
        assert_eq!(value["paymentMethod"], "cash");
    }
}
