//! Todo List Frontend App
//!
//! Startup: fetch the batch, mount the list, or show the load error banner.

use leptos::task::spawn_local;
use web_sys::Element;

use crate::api;
use crate::components::TodoList;
use crate::config::AppConfig;
use crate::dom::{create_element, document, DomError};
use crate::models::Todo;

/// Banner text shown when the todos cannot be loaded
pub const LOAD_ERROR_TEXT: &str = "Impossible de charger les todos";

/// Run the app on the wasm-bindgen executor.
pub fn start(config: AppConfig) {
    spawn_local(run(config));
}

pub async fn run(config: AppConfig) {
    let url = config.todos_url();
    log::info!("[APP] Loading todos from {}", url);

    match api::fetch_todos(&url).await {
        Ok(todos) => {
            log::info!("[APP] Loaded {} todos", todos.len());
            // A host page without the container or template is broken; don't hide it.
            if let Err(err) = mount_list(todos, &config) {
                panic!("todo list could not be mounted: {}", err);
            }
        }
        Err(err) => {
            log::error!("[APP] {} (status {:?}): {:?}", err, err.status(), err.cause);
            if let Err(banner_err) = show_error_banner() {
                log::error!("[APP] could not show error banner: {}", banner_err);
            }
        }
    }
}

fn mount_list(todos: Vec<Todo>, config: &AppConfig) -> Result<(), DomError> {
    let container = document()?
        .get_element_by_id(&config.mount_id)
        .ok_or_else(|| DomError::MissingElement(format!("#{}", config.mount_id)))?;
    let list = TodoList::new(todos).with_template(config.template_id.clone());
    list.mount(&container)?;
    log::info!("[APP] Mounted {} todos into #{}", list.todos().len(), config.mount_id);
    Ok(())
}

/// Put the (non-dismissible) alert at the very top of the body.
pub fn show_error_banner() -> Result<Element, DomError> {
    let banner = create_element(
        "div",
        &[("class", Some("alert alert-danger m-2")), ("role", Some("alert"))],
        Some(LOAD_ERROR_TEXT),
    )?;
    let body = document()?
        .body()
        .ok_or_else(|| DomError::MissingElement("body".to_string()))?;
    body.prepend_with_node_1(&banner)?;
    Ok(banner)
}
