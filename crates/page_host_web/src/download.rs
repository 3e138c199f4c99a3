//! Browser file downloads through a temporary object URL and anchor.

use web_sys::{Blob, File};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Name used when a file carries none.
pub const FALLBACK_DOWNLOAD_NAME: &str = "download";
/// Delay before the temporary object URL is revoked, giving the browser time to start the save.
pub const REVOKE_DELAY_MS: i32 = 1_000;

/// Saves `blob` under `file_name` using the browser's native download flow.
///
/// # Errors
///
/// Returns an error outside the browser or when the anchor/object URL cannot be created.
pub fn download_blob(blob: &Blob, file_name: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document unavailable".to_string())?;
        let url = web_sys::Url::create_object_url_with_blob(blob)
            .map_err(|err| format!("failed to create object URL: {err:?}"))?;

        let clicked = click_download_anchor(&document, &url, download_name(file_name));
        schedule_revoke(&window, url);
        clicked
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (blob, file_name);
        Err(crate::unsupported("downloads"))
    }
}

/// Saves `file` under its own name.
///
/// # Errors
///
/// Same as [`download_blob`].
pub fn download_file(file: &File) -> Result<(), String> {
    download_blob(file, &file.name())
}

/// Saves `text` as a file of type `mime`.
///
/// # Errors
///
/// Same as [`download_blob`], plus failures building the blob.
pub fn download_text(file_name: &str, text: &str, mime: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let parts = js_sys::Array::of1(&JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|err| format!("failed to build blob: {err:?}"))?;
        download_blob(&blob, file_name)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (file_name, text, mime);
        Err(crate::unsupported("downloads"))
    }
}

/// Name the saved file gets: `raw` trimmed, or [`FALLBACK_DOWNLOAD_NAME`] when blank.
pub fn download_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        FALLBACK_DOWNLOAD_NAME
    } else {
        trimmed
    }
}

#[cfg(target_arch = "wasm32")]
fn click_download_anchor(
    document: &web_sys::Document,
    href: &str,
    file_name: &str,
) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|err| format!("failed to create download anchor: {err:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to cast download anchor".to_string())?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.set_hidden(true);

    let body = document
        .body()
        .ok_or_else(|| "document body unavailable".to_string())?;
    body.append_child(&anchor)
        .map_err(|err| format!("failed to attach download anchor: {err:?}"))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn schedule_revoke(window: &web_sys::Window, url: String) {
    let revoke = Closure::once_into_js(move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    });
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        revoke.unchecked_ref(),
        REVOKE_DELAY_MS,
    ) {
        leptos::logging::warn!("object URL revoke could not be scheduled: {err:?}");
    }
}
