//! Typed DOM lookup over `web-sys` query roots.
//!
//! The synchronous lookups fail with [`LookupError`] when nothing matches or a match has the
//! wrong type. The `wait_for*` variants first wait for the document to finish parsing; in
//! non-strict mode a failed lookup leaves them pending forever.

use page_host::{settle_lookup, typed_all, typed_one, LookupError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DocumentFragment, Element, NodeList};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;

/// A node whose subtree can be searched with CSS selectors.
pub trait QueryRoot {
    /// First element matching `selector`.
    fn query_one(&self, selector: &str) -> Result<Option<Element>, JsValue>;

    /// Every element matching `selector`, in document order.
    fn query_every(&self, selector: &str) -> Result<NodeList, JsValue>;

    /// Document this root belongs to.
    fn owner(&self) -> Option<Document>;
}

impl QueryRoot for Document {
    fn query_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn owner(&self) -> Option<Document> {
        Some(self.clone())
    }
}

impl QueryRoot for Element {
    fn query_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn owner(&self) -> Option<Document> {
        self.owner_document()
    }
}

impl QueryRoot for DocumentFragment {
    fn query_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn owner(&self) -> Option<Document> {
        self.owner_document()
    }
}

/// Finds the first element matching `selector` and returns it as a `T`.
///
/// # Errors
///
/// Returns [`LookupError`] when the selector is invalid, nothing matches, or the match is not a
/// `T`.
pub fn query_as<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Result<T, LookupError> {
    let found = root
        .query_one(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    typed_one(selector, found, |element| element.dyn_into::<T>().ok())
}

/// Finds every element matching `selector`; all of them must be `T`s.
///
/// # Errors
///
/// Returns [`LookupError`] when the selector is invalid, nothing matches, or any match is not a
/// `T`.
pub fn query_all_as<T: JsCast>(
    root: &impl QueryRoot,
    selector: &str,
) -> Result<Vec<T>, LookupError> {
    let list = root
        .query_every(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    let nodes = (0..list.length()).filter_map(|index| list.item(index));
    typed_all(selector, nodes, |node| node.dyn_into::<T>().ok())
}

/// Waits for `root`'s document to be parsed, then behaves like [`query_as`].
///
/// With `strict == false` a failed lookup never resolves.
///
/// # Errors
///
/// Only in strict mode, with the same errors as [`query_as`].
pub async fn wait_for<T: JsCast>(
    root: &impl QueryRoot,
    selector: &str,
    strict: bool,
) -> Result<T, LookupError> {
    root_ready(root).await;
    settle_lookup(query_as(root, selector), strict).await
}

/// Waits for `root`'s document to be parsed, then behaves like [`query_all_as`].
///
/// With `strict == false` a failed lookup never resolves.
///
/// # Errors
///
/// Only in strict mode, with the same errors as [`query_all_as`].
pub async fn wait_for_all<T: JsCast>(
    root: &impl QueryRoot,
    selector: &str,
    strict: bool,
) -> Result<Vec<T>, LookupError> {
    root_ready(root).await;
    settle_lookup(query_all_as(root, selector), strict).await
}

/// Resolves once the current window's document has finished parsing.
///
/// Resolves immediately when parsing is already done or no document exists.
pub async fn document_ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document_parsed(&document).await;
        }
    }
}

/// Resolves once `document` has finished parsing.
pub async fn document_parsed(document: &Document) {
    #[cfg(target_arch = "wasm32")]
    {
        if !still_loading(&document.ready_state()) {
            return;
        }

        let (tx, rx) = oneshot::channel::<()>();
        let sender = Rc::new(RefCell::new(Some(tx)));
        let on_ready = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(());
            }
        }));
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        if document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            return;
        }
        let _ = rx.await;
        drop(on_ready);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = document;
    }
}

async fn root_ready(root: &impl QueryRoot) {
    match root.owner() {
        Some(document) => document_parsed(&document).await,
        None => document_ready().await,
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn invalid_selector(selector: &str, err: &JsValue) -> LookupError {
    LookupError::InvalidSelector {
        selector: selector.to_string(),
        reason: crate::error::error_report_from_js(err).message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_documents_are_awaited() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
