// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod cars_state;
pub mod loads_state;

pub use app_state::*;
pub use auth_state::*;
pub use cars_state::*;
pub use loads_state::*;
