//! Current-page location helpers.

use page_host::{PageControl, SearchParams};

/// Parses the current window's query string. Empty outside the browser.
pub fn current_search_params() -> SearchParams {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        SearchParams::parse(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SearchParams::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Page control backed by `window.location`.
pub struct WebPageControl;

impl PageControl for WebPageControl {
    fn reload(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .reload()
                .map_err(|err| format!("page reload failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(crate::unsupported("page reload"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_location_parity() {
        assert!(current_search_params().is_empty());
        assert_eq!(
            WebPageControl.reload(),
            Err("page reload is only available when compiled for wasm32".to_string())
        );
    }
}
