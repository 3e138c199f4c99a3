//! Page-level configuration: where the dialog elements live and how they are animated.

use serde::{Deserialize, Serialize};

use crate::dialog::DialogKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Selectors locating the five singleton dialog elements.
pub struct DialogSelectors {
    /// Alert dialog selector.
    pub alert: String,
    /// Confirm dialog selector.
    pub confirm: String,
    /// Prompt dialog selector.
    pub prompt: String,
    /// Loader dialog selector.
    pub loader: String,
    /// Console dialog selector.
    pub console: String,
}

impl Default for DialogSelectors {
    fn default() -> Self {
        Self {
            alert: format!("#{}", DialogKind::Alert.dom_id()),
            confirm: format!("#{}", DialogKind::Confirm.dom_id()),
            prompt: format!("#{}", DialogKind::Prompt.dom_id()),
            loader: format!("#{}", DialogKind::Loader.dom_id()),
            console: format!("#{}", DialogKind::Console.dom_id()),
        }
    }
}

impl DialogSelectors {
    /// Selector configured for `kind`.
    pub fn selector(&self, kind: DialogKind) -> &str {
        match kind {
            DialogKind::Alert => &self.alert,
            DialogKind::Confirm => &self.confirm,
            DialogKind::Prompt => &self.prompt,
            DialogKind::Loader => &self.loader,
            DialogKind::Console => &self.console,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Selectors for the parts inside each dialog element, relative to the dialog.
pub struct DialogLayout {
    /// Heading that receives the title text.
    pub heading: String,
    /// Container that receives the body text (or console entries).
    pub content: String,
    /// Accept control (confirm and prompt).
    pub accept: String,
    /// Decline control (confirm and prompt).
    pub decline: String,
    /// Text input (prompt).
    pub input: String,
}

impl Default for DialogLayout {
    fn default() -> Self {
        Self {
            heading: "header h2".to_string(),
            content: ".content".to_string(),
            accept: "footer .accept".to_string(),
            decline: "footer .decline".to_string(),
            input: "input".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Animation timing for the loader dialog.
pub struct LoaderTiming {
    /// Fade-in and fade-out duration in milliseconds.
    pub fade_ms: u32,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self { fade_ms: 200 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Complete page helper configuration.
pub struct PageConfig {
    /// Dialog element selectors.
    pub selectors: DialogSelectors,
    /// Dialog inner structure.
    pub layout: DialogLayout,
    /// Loader animation timing.
    pub loader: LoaderTiming,
}

impl PageConfig {
    /// Parses configuration JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw_json` is not valid configuration JSON.
    pub fn from_json(raw_json: &str) -> Result<Self, String> {
        serde_json::from_str(raw_json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_selectors_point_at_dialog_ids() {
        let selectors = DialogSelectors::default();
        for kind in DialogKind::ALL {
            assert_eq!(selectors.selector(kind), format!("#{}", kind.dom_id()));
        }
        assert_eq!(selectors.alert, "#alert-dialog");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            PageConfig::from_json(r##"{"selectors":{"alert":"#oops"},"loader":{"fade_ms":0}}"##)
                .expect("parse config");

        assert_eq!(config.selectors.alert, "#oops");
        assert_eq!(config.selectors.prompt, "#prompt-dialog");
        assert_eq!(config.layout, DialogLayout::default());
        assert_eq!(config.loader.fade_ms, 0);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PageConfig::from_json("{").is_err());
    }
}
