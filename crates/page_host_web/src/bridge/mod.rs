//! JS glue for browser features `web-sys` does not cover ergonomically.
//!
//! Calls route to the wasm implementation or to a non-wasm shim so callers stay target-agnostic.

use web_sys::HtmlElement;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Animates `element`'s opacity from `from` to `to` and resolves when the animation finishes.
pub async fn animate_opacity(
    element: &HtmlElement,
    from: f64,
    to: f64,
    duration_ms: f64,
) -> Result<(), String> {
    imp::animate_opacity(element, from, to, duration_ms).await
}
