//! Conversion of thrown JS values into [`ErrorReport`]s.

use page_host::ErrorReport;
use wasm_bindgen::{JsCast, JsValue};

/// Describes a thrown JS value.
///
/// `Error` instances keep their name, message, and stack. Any other value becomes the
/// "undefined error type" report. Never fails.
pub fn error_report_from_js(value: &JsValue) -> ErrorReport {
    let report = value.dyn_ref::<js_sys::Error>().map(|err| {
        let report = ErrorReport::new(String::from(err.name()), String::from(err.message()));
        match js_sys::Reflect::get(err, &JsValue::from_str("stack"))
            .ok()
            .and_then(|stack| stack.as_string())
        {
            Some(stack) => report.with_stack(stack),
            None => report,
        }
    });
    ErrorReport::normalize(report)
}
