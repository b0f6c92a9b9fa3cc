pub mod car;
pub mod load;
pub mod user;

pub use car::{Car, CarPayload, Location};
pub use load::{Load, LoadPayload};
pub use user::User;
