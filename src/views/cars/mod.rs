pub mod car_modal;
pub mod cars_page;

pub use car_modal::render_car_modal;
pub use cars_page::render_cars_page;
