pub mod record_client;

pub use record_client::{AuthResponse, RecordClient};
