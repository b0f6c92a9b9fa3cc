// ============================================================================
// LOGIN VIEW - Formulario de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{AuthViewModel, CarsViewModel};
use crate::views::shared::create_form_group;

/// Renderizar la pantalla de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    // Estado local del formulario (vive en los closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let logo = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("🚚")
        .build();
    let title = ElementBuilder::new("h1")?.text("Freight Admin").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Fleet & loads administration")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = ElementBuilder::new("div")?.class("login-form").build();

    // Error del último intento (login rejected)
    if let Some(error) = state.auth.get_error() {
        let error_el = ElementBuilder::new("p")?
            .class("form-error")
            .text(&error)
            .build();
        append_child(&form, &error_el)?;
    }

    let email_group = create_form_group(
        "login-email",
        "Email",
        "you@example.com",
        "email",
        email.clone(),
    )?;
    let password_group = create_form_group(
        "login-password",
        "Password",
        "Your password",
        "password",
        password.clone(),
    )?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    // Botón de login
    let submit_text = if state.auth.get_loading() {
        "Logging in..."
    } else {
        "Log in"
    };
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary btn-login")
        .text(submit_text)
        .build();

    {
        let state = state.clone();
        let email = email.clone();
        let password = password.clone();
        on_click(&submit_btn, move |_| {
            let email_value = email.borrow().trim().to_string();
            let password_value = password.borrow().clone();

            // Validación client-side: nunca se inicia la request si falla
            if email_value.is_empty() || password_value.is_empty() {
                alert("Please fill in email and password");
                return;
            }
            if !email_value.contains('@') {
                alert("Invalid email address");
                return;
            }
            if state.auth.get_loading() {
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                vm.login(&state, email_value, password_value).await;

                // Con sesión establecida, cargar la ruta inicial (cars)
                if state.auth.is_logged_in() {
                    CarsViewModel::new().fetch_all(&state).await;
                }
            });
        })?;
    }
    append_child(&form, &submit_btn)?;

    // Footer: enlace a registro
    let footer = ElementBuilder::new("div")?.class("login-footer").build();
    let footer_text = ElementBuilder::new("p")?.text("No account yet?").build();
    let register_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-link")
        .text("Create one")
        .build();
    {
        let state = state.clone();
        on_click(&register_btn, move |_| {
            state.auth.set_error(None);
            state.set_route(Route::Register);
            state.notify_subscribers();
        })?;
    }
    append_child(&footer, &footer_text)?;
    append_child(&footer, &register_btn)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &footer)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
