pub mod form;

pub use form::create_form_group;
