//! UI Components
//!
//! Imperative web-sys components for the todo list.

mod todo_list;
mod todo_list_item;

pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
