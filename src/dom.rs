//! DOM Helpers
//!
//! Element construction and `<template>` cloning on top of web-sys.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlTemplateElement};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no document available")]
    NoDocument,
    #[error("template #{0} not found")]
    MissingTemplate(String),
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("DOM exception: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(describe_js(&value))
    }
}

/// Human readable form of a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

/// Create a new, detached element.
///
/// Attributes whose value is `None` are skipped, which is how boolean
/// attributes such as `checked` are applied conditionally. `text` is set as
/// plain text content and never parsed as markup.
pub fn create_element(
    tag: &str,
    attributes: &[(&str, Option<&str>)],
    text: Option<&str>,
) -> Result<Element, DomError> {
    let element = document()?.create_element(tag)?;
    for (name, value) in attributes {
        if let Some(value) = value {
            element.set_attribute(name, value)?;
        }
    }
    if text.is_some() {
        element.set_text_content(text);
    }
    Ok(element)
}

/// Deep-clone the content of `<template id=...>` and append it to `container`.
///
/// The template must exist in the document. Callers query `container`
/// afterwards to reach the inserted elements.
pub fn clone_template(container: &Element, template_id: &str) -> Result<(), DomError> {
    let template = document()?
        .get_element_by_id(template_id)
        .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok())
        .ok_or_else(|| DomError::MissingTemplate(template_id.to_string()))?;
    let fragment = template.content().clone_node_with_deep(true)?;
    container.append_with_node_1(&fragment)?;
    Ok(())
}

/// `query_selector` that treats "no match" as an error
pub fn query(root: &Element, selector: &str) -> Result<Element, DomError> {
    root.query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

/// All elements under `root` matching `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
