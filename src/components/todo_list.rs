//! Todo List Component
//!
//! Clones the list template, renders one row per todo and wires the add form
//! and the filter buttons.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FormData, HtmlFormElement};

use crate::components::TodoListItem;
use crate::config::TEMPLATE_ID;
use crate::dom::{clone_template, query, query_all, DomError};
use crate::models::{Filter, IdGenerator, Todo};

/// Marker class of the currently selected filter button
pub const ACTIVE_CLASS: &str = "active";

const LIST_SELECTOR: &str = ".list-group";
const FORM_SELECTOR: &str = "form";
const FILTER_BUTTONS_SELECTOR: &str = ".todolist-nav button";

pub struct TodoList {
    todos: Vec<Todo>,
    template_id: String,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            template_id: TEMPLATE_ID.to_string(),
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = template_id.into();
        self
    }

    /// The batch this list was built from. Rows added, toggled or deleted
    /// later are not reflected here.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Render into `container` and attach the form and filter handlers.
    pub fn mount(&self, container: &Element) -> Result<(), DomError> {
        clone_template(container, &self.template_id)?;

        let list = query(container, LIST_SELECTOR)?;
        for todo in &self.todos {
            let item = TodoListItem::new(todo)?;
            list.append_with_node_1(item.element())?;
        }

        let form = query(container, FORM_SELECTOR)?;
        let mut ids = IdGenerator::after(self.todos.len());
        let on_submit = {
            let list = list.clone();
            Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                ev.prevent_default();
                if let Err(err) = add_from_form(&ev, &list, &mut ids) {
                    log::warn!("[LIST] could not add todo: {}", err);
                }
            })
        };
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();

        for button in query_all(container, FILTER_BUTTONS_SELECTOR)? {
            let list = list.clone();
            let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                ev.prevent_default();
                if let Err(err) = select_filter(&ev, &list) {
                    log::warn!("[LIST] could not apply filter: {}", err);
                }
            });
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        log::debug!("[LIST] mounted {} todos", self.todos.len());
        Ok(())
    }
}

/// Read `title` from the submitted form and put a new row at the top.
fn add_from_form(ev: &Event, list: &Element, ids: &mut IdGenerator) -> Result<(), DomError> {
    let form = ev
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        .ok_or_else(|| DomError::MissingElement(FORM_SELECTOR.to_string()))?;

    let title = FormData::new_with_form(&form)?
        .get("title")
        .as_string()
        .unwrap_or_default();
    let todo = Todo::new(ids.next(), title);
    log::debug!("[LIST] adding {}", todo.dom_id());

    let item = TodoListItem::new(&todo)?;
    list.prepend_with_node_1(item.element())?;
    form.reset();
    Ok(())
}

/// Move the active marker to the clicked button and restyle the list.
fn select_filter(ev: &Event, list: &Element) -> Result<(), DomError> {
    let button = ev
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .ok_or_else(|| DomError::MissingElement(FILTER_BUTTONS_SELECTOR.to_string()))?;
    let filter = Filter::from_attribute(button.get_attribute("data-filter").as_deref());

    if let Some(parent) = button.parent_element() {
        for active in query_all(&parent, &format!(".{}", ACTIVE_CLASS))? {
            active.class_list().remove_1(ACTIVE_CLASS)?;
        }
    }
    button.class_list().add_1(ACTIVE_CLASS)?;

    let (add, remove) = filter.classes();
    for class in remove {
        list.class_list().remove_1(class)?;
    }
    if let Some(class) = add {
        list.class_list().add_1(class)?;
    }
    log::debug!("[LIST] filter {:?}", filter);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::todo_list_item::COMPLETED_CLASS;
    use crate::dom::{create_element, document};
    use crate::models::{HIDE_COMPLETED_CLASS, HIDE_TODO_CLASS};
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement};

    const TEST_TEMPLATE_ID: &str = "todolist-test-template";

    const TEMPLATE_HTML: &str = r#"
        <form class="todolist-form">
            <input type="text" name="title">
            <button type="submit">Ajouter</button>
        </form>
        <nav class="todolist-nav">
            <button type="button" class="active" data-filter="all">Toutes</button>
            <button type="button" data-filter="todo">A faire</button>
            <button type="button" data-filter="done">Faites</button>
        </nav>
        <ul class="list-group"></ul>
    "#;

    /// Fresh container attached to the body, with the test template available
    fn fixture() -> Element {
        let doc = document().unwrap();
        let body = doc.body().unwrap();
        if doc.get_element_by_id(TEST_TEMPLATE_ID).is_none() {
            let template =
                create_element("template", &[("id", Some(TEST_TEMPLATE_ID))], None).unwrap();
            template.set_inner_html(TEMPLATE_HTML);
            body.append_with_node_1(&template).unwrap();
        }
        let container = create_element("div", &[], None).unwrap();
        body.append_with_node_1(&container).unwrap();
        container
    }

    fn mount(todos: Vec<Todo>) -> Element {
        let container = fixture();
        TodoList::new(todos)
            .with_template(TEST_TEMPLATE_ID)
            .mount(&container)
            .unwrap();
        container
    }

    fn labels(container: &Element) -> Vec<String> {
        query_all(container, ".list-group > li label")
            .unwrap()
            .iter()
            .map(|l| l.text_content().unwrap_or_default())
            .collect()
    }

    fn click_filter(container: &Element, filter: &str) {
        query(container, &format!(".todolist-nav button[data-filter={}]", filter))
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn sample() -> Vec<Todo> {
        vec![
            Todo { id: 1, title: "A".into(), completed: false },
            Todo { id: 2, title: "B".into(), completed: true },
        ]
    }

    #[wasm_bindgen_test]
    fn renders_every_todo_in_order() {
        let todos = (1..=5).map(|i| Todo::new(i, format!("todo {}", i))).collect();
        let container = mount(todos);
        assert_eq!(
            labels(&container),
            vec!["todo 1", "todo 2", "todo 3", "todo 4", "todo 5"]
        );
        container.remove();
    }

    #[wasm_bindgen_test]
    fn only_completed_rows_are_marked() {
        let container = mount(sample());
        let rows = query_all(&container, ".list-group > li").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].class_list().contains(COMPLETED_CLASS));
        assert!(rows[1].class_list().contains(COMPLETED_CLASS));
        container.remove();
    }

    #[wasm_bindgen_test]
    fn submit_prepends_new_row() {
        let container = mount(sample());
        let input = query(&container, "input[name=title]")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        let form = query(&container, "form")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();

        input.set_value("Buy milk");
        form.request_submit().unwrap();

        assert_eq!(labels(&container), vec!["Buy milk", "A", "B"]);
        assert_eq!(input.value(), "");
        let first = query(&container, ".list-group > li input").unwrap();
        assert_eq!(first.id(), "todo-3");

        input.set_value("Call mom");
        form.request_submit().unwrap();
        let first = query(&container, ".list-group > li input").unwrap();
        assert_eq!(first.id(), "todo-4");
        assert_eq!(labels(&container).len(), 4);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn empty_title_is_accepted() {
        let container = mount(sample());
        let form = query(&container, "form")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        form.request_submit().unwrap();
        assert_eq!(labels(&container), vec!["", "A", "B"]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn filters_are_exclusive() {
        let container = mount(sample());
        let list = query(&container, ".list-group").unwrap();
        let active = || {
            query_all(&container, ".todolist-nav button.active")
                .unwrap()
                .iter()
                .filter_map(|b| b.get_attribute("data-filter"))
                .collect::<Vec<_>>()
        };

        click_filter(&container, "todo");
        assert_eq!(active(), vec!["todo"]);
        assert!(list.class_list().contains(HIDE_COMPLETED_CLASS));
        assert!(!list.class_list().contains(HIDE_TODO_CLASS));

        click_filter(&container, "done");
        assert_eq!(active(), vec!["done"]);
        assert!(list.class_list().contains(HIDE_TODO_CLASS));
        assert!(!list.class_list().contains(HIDE_COMPLETED_CLASS));

        click_filter(&container, "todo");
        click_filter(&container, "all");
        assert_eq!(active(), vec!["all"]);
        assert!(!list.class_list().contains(HIDE_TODO_CLASS));
        assert!(!list.class_list().contains(HIDE_COMPLETED_CLASS));

        // Filtering never touches the rows
        assert_eq!(labels(&container), vec!["A", "B"]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn deleting_leaves_batch_untouched() {
        let container = fixture();
        let list = TodoList::new(sample()).with_template(TEST_TEMPLATE_ID);
        list.mount(&container).unwrap();

        query(&container, ".list-group > li button.btn-trash")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();

        assert_eq!(labels(&container), vec!["B"]);
        assert_eq!(list.todos().len(), 2);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn missing_template_fails_mount() {
        let container = create_element("div", &[], None).unwrap();
        let err = TodoList::new(sample())
            .with_template("no-such-template")
            .mount(&container)
            .unwrap_err();
        assert!(matches!(err, DomError::MissingTemplate(_)));
    }
}
