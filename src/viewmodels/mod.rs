pub mod auth_viewmodel;
pub mod cars_viewmodel;
pub mod loads_viewmodel;

pub use auth_viewmodel::{AuthViewModel, RegisterForm};
pub use cars_viewmodel::{CarForm, CarsViewModel};
pub use loads_viewmodel::{LoadForm, LoadsViewModel};
