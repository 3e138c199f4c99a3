//! Browser (`wasm32`) implementations of the [`page_host`] contracts.
//!
//! This crate binds the page's `<dialog>` elements into a [`page_host::DialogService`], and
//! provides typed DOM lookup, file downloads, location access, JS error conversion, and the
//! failure escalation policy. Non-wasm builds compile against a fallback shim so the crate can be
//! tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod dialog;
pub mod download;
pub mod error;
pub mod failure;
pub mod location;
pub mod lookup;

pub use dialog::{bind_dialog_service, window_dialog_service, WebDialogSurface};
pub use download::{download_blob, download_file, download_name, download_text};
pub use error::error_report_from_js;
pub use failure::{escalate, escalate_js, spawn_escalation, FAILURE_TITLE};
pub use location::{current_search_params, WebPageControl};
pub use lookup::{
    document_parsed, document_ready, query_all_as, query_as, wait_for, wait_for_all, QueryRoot,
};

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn unsupported(feature: &str) -> String {
    format!("{feature} is only available when compiled for wasm32")
}
