//! Todo List Item Component
//!
//! One `<li>` row: checkbox, label and delete button.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{create_element, DomError};
use crate::models::Todo;

/// Marker class for rows whose checkbox is checked
pub const COMPLETED_CLASS: &str = "is-completed";

const TRASH_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" class="bi bi-trash" viewBox="0 0 16 16">
  <path d="M5.5 5.5A.5.5 0 0 1 6 6v6a.5.5 0 0 1-1 0V6a.5.5 0 0 1 .5-.5m2.5 0a.5.5 0 0 1 .5.5v6a.5.5 0 0 1-1 0V6a.5.5 0 0 1 .5-.5m3 .5a.5.5 0 0 0-1 0v6a.5.5 0 0 0 1 0z"/>
  <path d="M14.5 3a1 1 0 0 1-1 1H13v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V4h-.5a1 1 0 0 1-1-1V2a1 1 0 0 1 1-1H6a1 1 0 0 1 1-1h2a1 1 0 0 1 1 1h3.5a1 1 0 0 1 1 1zM4.118 4 4 4.059V13a1 1 0 0 0 1 1h6a1 1 0 0 0 1-1V4.059L11.882 4zM2.5 3h11V2h-11z"/>
</svg>"#;

/// A rendered todo row.
///
/// Toggling and deleting only affect the row itself: the `Todo` it was built
/// from is never written back and the owning list is not notified.
pub struct TodoListItem {
    element: Element,
}

impl TodoListItem {
    pub fn new(todo: &Todo) -> Result<Self, DomError> {
        let id = todo.dom_id();

        let li = create_element("li", &[("class", Some("todolist-item"))], None)?;

        let checkbox = create_element(
            "input",
            &[
                ("class", Some("todo-checkbox")),
                ("type", Some("checkbox")),
                ("id", Some(id.as_str())),
                ("checked", todo.completed.then_some("")),
            ],
            None,
        )?;

        let label = create_element(
            "label",
            &[("class", Some("todolist-item-label")), ("for", Some(id.as_str()))],
            Some(todo.title.as_str()),
        )?;

        let button = create_element("button", &[("class", Some("btn-trash"))], None)?;
        button.set_inner_html(TRASH_ICON);

        li.append_with_node_1(&checkbox)?;
        li.append_with_node_1(&label)?;
        li.append_with_node_1(&button)?;

        if let Some(input) = checkbox.dyn_ref::<HtmlInputElement>() {
            set_completed(&li, input.checked());
        }

        // Delete
        let row = li.clone();
        let dom_id = id.clone();
        let on_delete = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            log::debug!("[ITEM] removing {}", dom_id);
            row.remove();
        });
        button.add_event_listener_with_callback("click", on_delete.as_ref().unchecked_ref())?;
        on_delete.forget();

        // Toggle (reads the checkbox, not the todo)
        let row = li.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if let Some(input) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                set_completed(&row, input.checked());
            }
        });
        checkbox.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();

        Ok(Self { element: li })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

fn set_completed(row: &Element, checked: bool) {
    let classes = row.class_list();
    let result = if checked {
        classes.add_1(COMPLETED_CLASS)
    } else {
        classes.remove_1(COMPLETED_CLASS)
    };
    if let Err(err) = result {
        log::warn!("[ITEM] class toggle failed: {:?}", err);
    }
}
