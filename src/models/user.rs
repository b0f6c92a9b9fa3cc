use serde::{Deserialize, Serialize};

/// Registro de usuario devuelto por el backend (colección "users").
/// Se tolera cualquier campo ausente: el backend puede omitir campos según
/// la visibilidad configurada en la colección.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "collectionId", default)]
    pub collection_id: String,
    #[serde(rename = "collectionName", default)]
    pub collection_name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "emailVisibility", default)]
    pub email_visibility: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "isPaid", default)]
    pub is_paid: bool,
    #[serde(default)]
    pub verified: bool,
    /// El registro normalmente NO devuelve token (el login sí). Solo se
    /// establece sesión en registro si el backend lo incluyera.
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_minimal_record() {
        let json = r#"{"id": "u1", "email": "a@b.co", "role": "driver"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, "driver");
        assert!(user.token.is_none());
        assert!(!user.is_paid);
    }

    #[test]
    fn test_user_decodes_register_constants() {
        let json = r#"{
            "id": "u2",
            "email": "new@b.co",
            "emailVisibility": true,
            "name": "",
            "role": "driver",
            "isActive": true,
            "isPaid": false
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.email_visibility);
        assert!(user.is_active);
        assert!(!user.is_paid);
        assert_eq!(user.name, "");
    }
}
