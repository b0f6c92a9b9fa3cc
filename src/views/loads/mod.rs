pub mod load_modal;
pub mod loads_page;

pub use load_modal::render_load_modal;
pub use loads_page::render_loads_page;
