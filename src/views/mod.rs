pub mod app;
pub mod auth;
pub mod cars;
pub mod loads;
pub mod shared;
pub mod sidebar;

pub use app::render_app;
