/// URL base del backend de registros (PocketBase)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8090 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8090",
};

/// Clave de localStorage donde se persiste el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Nombres de colecciones en el backend
pub const COLLECTION_CARS: &str = "cars";
pub const COLLECTION_LOADS: &str = "loads";
pub const COLLECTION_USERS: &str = "users";
