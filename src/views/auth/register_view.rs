// ============================================================================
// REGISTER VIEW - Formulario de registro
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{AuthViewModel, RegisterForm};
use crate::views::shared::create_form_group;

/// Renderizar la pantalla de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let password_confirm = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?
        .class("login-container register-container")
        .build();

    // Header con botón de vuelta
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-back")
        .text("← Back to login")
        .build();
    {
        let state = state.clone();
        on_click(&back_btn, move |_| {
            state.auth.set_error(None);
            state.set_route(Route::Login);
            state.notify_subscribers();
        })?;
    }
    let title = ElementBuilder::new("h1")?.text("Create account").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Driver accounts for the freight panel")
        .build();
    append_child(&header, &back_btn)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = ElementBuilder::new("div")?
        .class("login-form register-form")
        .build();

    if let Some(error) = state.auth.get_error() {
        let error_el = ElementBuilder::new("p")?
            .class("form-error")
            .text(&error)
            .build();
        append_child(&form, &error_el)?;
    }

    let name_group = create_form_group(
        "register-name",
        "Name (optional)",
        "Full name",
        "text",
        name.clone(),
    )?;
    let email_group = create_form_group(
        "register-email",
        "Email",
        "you@example.com",
        "email",
        email.clone(),
    )?;
    let password_group = create_form_group(
        "register-password",
        "Password",
        "At least 8 characters",
        "password",
        password.clone(),
    )?;
    let confirm_group = create_form_group(
        "register-password-confirm",
        "Confirm password",
        "Repeat the password",
        "password",
        password_confirm.clone(),
    )?;
    append_child(&form, &name_group)?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &confirm_group)?;

    let submit_text = if state.auth.get_loading() {
        "Creating account..."
    } else {
        "Register"
    };
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary btn-login")
        .text(submit_text)
        .build();

    {
        let state = state.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let password_confirm = password_confirm.clone();
        on_click(&submit_btn, move |_| {
            let form = RegisterForm {
                name: name.borrow().trim().to_string(),
                email: email.borrow().trim().to_string(),
                password: password.borrow().clone(),
                password_confirm: password_confirm.borrow().clone(),
            };

            // Validación client-side antes de cualquier request
            if form.email.is_empty() || form.password.is_empty() {
                alert("Please fill in email and password");
                return;
            }
            if !form.email.contains('@') {
                alert("Invalid email address");
                return;
            }
            if form.password != form.password_confirm {
                alert("Passwords do not match");
                return;
            }
            if state.auth.get_loading() {
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                if vm.register(&state, form).await.is_ok() && !state.auth.is_logged_in() {
                    // Registro sin token: hay que iniciar sesión aparte
                    alert("Account created. Please log in.");
                }
            });
        })?;
    }
    append_child(&form, &submit_btn)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
