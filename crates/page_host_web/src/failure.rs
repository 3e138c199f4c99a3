//! Application-wide failure escalation policy.
//!
//! A locked failure leaves the page in a state the user cannot recover from: it is shown in the
//! alert dialog and the page is reloaded once the alert closes. An unlocked failure is only
//! logged.

use leptos::logging;
use page_host::{DialogService, ErrorReport, PageControl};
use wasm_bindgen::JsValue;

use crate::error::error_report_from_js;

/// Title of the alert shown for locked failures.
pub const FAILURE_TITLE: &str = "Error";

/// Routes `report` according to `locked`.
pub async fn escalate(
    dialogs: &DialogService,
    page: &dyn PageControl,
    report: &ErrorReport,
    locked: bool,
) {
    let text = report.describe();
    if !locked {
        logging::error!("{text}");
        return;
    }

    logging::error!("unrecoverable failure, reloading page: {text}");
    if let Err(err) = dialogs.alert(&text, FAILURE_TITLE).await {
        logging::warn!("failure alert could not be shown: {err}");
    }
    if let Err(err) = page.reload() {
        logging::warn!("{err}");
    }
}

/// [`escalate`] for a thrown JS value.
pub async fn escalate_js(
    dialogs: &DialogService,
    page: &dyn PageControl,
    thrown: &JsValue,
    locked: bool,
) {
    escalate(dialogs, page, &error_report_from_js(thrown), locked).await;
}

/// Runs [`escalate`] detached from the caller, for synchronous call sites.
pub fn spawn_escalation(
    dialogs: DialogService,
    page: impl PageControl + 'static,
    report: ErrorReport,
    locked: bool,
) {
    leptos::spawn_local(async move {
        escalate(&dialogs, &page, &report, locked).await;
    });
}
