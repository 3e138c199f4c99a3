//! Native `<dialog>` surfaces and dialog-service wiring for the browser.

use std::rc::Rc;

use leptos::logging;
use page_host::{
    ConsoleEntry, DialogContent, DialogError, DialogFuture, DialogKind, DialogService,
    DialogSurface, DialogSurfaces, DialogTone, DialogTrigger, FadeDirection, ListenerHandle,
    LoaderTiming, PageConfig, TriggerSink,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    AbortController, AddEventListenerOptions, Element, Event, EventTarget, HtmlDialogElement,
    HtmlElement, HtmlInputElement, KeyboardEvent,
};

use crate::lookup::{query_as, QueryRoot};

type Listener = Closure<dyn FnMut(Event)>;

#[derive(Debug, Clone)]
/// One page dialog element and the parts a session writes to or listens on.
pub struct WebDialogSurface {
    kind: DialogKind,
    dialog: HtmlDialogElement,
    heading: HtmlElement,
    content: HtmlElement,
    accept: Option<HtmlElement>,
    decline: Option<HtmlElement>,
    input: Option<HtmlInputElement>,
    timing: LoaderTiming,
}

impl WebDialogSurface {
    /// Binds the dialog for `kind` below `root` using the configured selectors.
    ///
    /// Confirm and prompt dialogs must contain accept and decline controls; prompts also need an
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Lookup`] when the dialog or a required part is missing or of the
    /// wrong element type.
    pub fn bind(
        root: &impl QueryRoot,
        kind: DialogKind,
        config: &PageConfig,
    ) -> Result<Self, DialogError> {
        let lookup_failed = |source| DialogError::Lookup { kind, source };
        let layout = &config.layout;

        let dialog: HtmlDialogElement =
            query_as(root, config.selectors.selector(kind)).map_err(lookup_failed)?;
        let scope: &Element = dialog.as_ref();
        let heading = query_as(scope, &layout.heading).map_err(lookup_failed)?;
        let content = query_as(scope, &layout.content).map_err(lookup_failed)?;

        let has_controls = matches!(kind, DialogKind::Confirm | DialogKind::Prompt);
        let accept = has_controls
            .then(|| query_as(scope, &layout.accept))
            .transpose()
            .map_err(lookup_failed)?;
        let decline = has_controls
            .then(|| query_as(scope, &layout.decline))
            .transpose()
            .map_err(lookup_failed)?;
        let input = (kind == DialogKind::Prompt)
            .then(|| query_as(scope, &layout.input))
            .transpose()
            .map_err(lookup_failed)?;

        Ok(Self {
            kind,
            dialog,
            heading,
            content,
            accept,
            decline,
            input,
            timing: config.loader,
        })
    }

    fn apply_tone(&self, tone: DialogTone) {
        let classes = self.heading.class_list();
        for other in DialogTone::ALL {
            let _ = classes.remove_1(other.class_token());
        }
        let _ = classes.add_1(tone.class_token());
    }

    fn listen(
        &self,
        trigger: DialogTrigger,
        sink: &TriggerSink,
        options: &AddEventListenerOptions,
        listeners: &mut Vec<Listener>,
    ) -> Result<(), String> {
        match trigger {
            DialogTrigger::Close => {
                attach(&self.dialog, "close", trigger, sink, options, listeners, |_| true)
            }
            DialogTrigger::Accept => {
                let accept = self.control(self.accept.as_ref(), "accept")?;
                attach(accept, "click", trigger, sink, options, listeners, |_| true)?;
                if let Some(input) = &self.input {
                    attach(input, "keydown", trigger, sink, options, listeners, is_enter_key)?;
                }
                Ok(())
            }
            DialogTrigger::Decline => {
                let decline = self.control(self.decline.as_ref(), "decline")?;
                attach(decline, "click", trigger, sink, options, listeners, |_| true)
            }
        }
    }

    fn control<'a>(
        &self,
        control: Option<&'a HtmlElement>,
        name: &str,
    ) -> Result<&'a HtmlElement, String> {
        control.ok_or_else(|| format!("{} dialog has no {name} control", self.kind))
    }
}

impl DialogSurface for WebDialogSurface {
    fn present(&self, content: &DialogContent) -> Result<(), DialogError> {
        self.heading.set_text_content(Some(&content.title));
        self.apply_tone(content.tone);
        self.content.set_text_content(Some(&content.body));
        if let Some(input) = &self.input {
            input.set_value(content.input.as_deref().unwrap_or_default());
        }

        if !self.dialog.open() {
            self.dialog
                .show_modal()
                .map_err(|err| DialogError::Present {
                    kind: self.kind,
                    reason: format!("{err:?}"),
                })?;
        }
        if let Some(input) = &self.input {
            let _ = input.focus();
        }
        Ok(())
    }

    fn reveal(&self) -> Result<(), DialogError> {
        if !self.dialog.open() {
            self.dialog.set_open(true);
        }
        Ok(())
    }

    fn dismiss(&self) {
        if self.dialog.open() {
            self.dialog.close();
        }
    }

    fn arm(
        &self,
        triggers: &[DialogTrigger],
        sink: TriggerSink,
    ) -> Result<ListenerHandle, DialogError> {
        if triggers.is_empty() {
            return Ok(ListenerHandle::inert());
        }
        let arm_failed = |reason| DialogError::Arm {
            kind: self.kind,
            reason,
        };

        let controller = AbortController::new().map_err(|err| arm_failed(format!("{err:?}")))?;
        let options = AddEventListenerOptions::new();
        options.set_signal(&controller.signal());

        let mut listeners = Vec::with_capacity(triggers.len());
        for &trigger in triggers {
            if let Err(reason) = self.listen(trigger, &sink, &options, &mut listeners) {
                controller.abort();
                return Err(arm_failed(reason));
            }
        }

        Ok(ListenerHandle::new(move || {
            controller.abort();
            drop(listeners);
        }))
    }

    fn input_value(&self) -> Option<String> {
        self.input.as_ref().map(HtmlInputElement::value)
    }

    fn fade(&self, direction: FadeDirection) -> DialogFuture<'_, ()> {
        let (from, to) = match direction {
            FadeDirection::In => (0.0, 1.0),
            FadeDirection::Out => (1.0, 0.0),
        };
        let duration_ms = f64::from(self.timing.fade_ms);
        Box::pin(async move {
            let element: &HtmlElement = self.dialog.as_ref();
            if let Err(err) = crate::bridge::animate_opacity(element, from, to, duration_ms).await
            {
                logging::warn!("{} dialog fade failed: {err}", self.kind);
            }
        })
    }

    fn append_entry(&self, entry: &ConsoleEntry) -> Result<(), DialogError> {
        let render_failed = |reason: String| DialogError::Present {
            kind: self.kind,
            reason,
        };
        let document = self
            .dialog
            .owner_document()
            .ok_or_else(|| render_failed("dialog is detached from its document".to_string()))?;
        let line = document
            .create_element("p")
            .map_err(|err| render_failed(format!("{err:?}")))?;
        line.set_class_name(&format!("console-entry {}", entry.level.as_str()));
        line.set_text_content(Some(&entry.message));
        self.content
            .append_child(&line)
            .map_err(|err| render_failed(format!("{err:?}")))?;
        Ok(())
    }

    fn clear_entries(&self) {
        self.content.set_text_content(None);
    }
}

fn attach(
    target: &EventTarget,
    event: &str,
    trigger: DialogTrigger,
    sink: &TriggerSink,
    options: &AddEventListenerOptions,
    listeners: &mut Vec<Listener>,
    accepts: fn(&Event) -> bool,
) -> Result<(), String> {
    let sink = sink.clone();
    let listener = Listener::wrap(Box::new(move |event: Event| {
        if accepts(&event) {
            sink(trigger);
        }
    }));
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            listener.as_ref().unchecked_ref(),
            options,
        )
        .map_err(|err| format!("`{event}` listener rejected: {err:?}"))?;
    listeners.push(listener);
    Ok(())
}

fn is_enter_key(event: &Event) -> bool {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return false;
    };
    let submits = submits_input(&key_event.key(), key_event.is_composing());
    if submits {
        event.prevent_default();
    }
    submits
}

/// Whether a keydown in the prompt input accepts the prompt. Enter pressed while an IME
/// composition is active only commits the composition.
fn submits_input(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

/// Binds all five page dialogs below `root` into a [`DialogService`].
///
/// # Errors
///
/// Returns the first dialog that fails to bind.
pub fn bind_dialog_service(
    root: &impl QueryRoot,
    config: &PageConfig,
) -> Result<DialogService, DialogError> {
    let bind = |kind| -> Result<Rc<dyn DialogSurface>, DialogError> {
        Ok(Rc::new(WebDialogSurface::bind(root, kind, config)?))
    };
    Ok(DialogService::new(DialogSurfaces {
        alert: bind(DialogKind::Alert)?,
        confirm: bind(DialogKind::Confirm)?,
        prompt: bind(DialogKind::Prompt)?,
        loader: bind(DialogKind::Loader)?,
        console: bind(DialogKind::Console)?,
    }))
}

/// Binds the page dialogs of the current window's document.
///
/// # Errors
///
/// Returns an error outside the browser, when no document exists, or when a dialog fails to
/// bind.
pub fn window_dialog_service(config: &PageConfig) -> Result<DialogService, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        bind_dialog_service(&document, config).map_err(|err| err.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        Err(crate::unsupported("page dialogs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_outside_composition_submits_prompt() {
        assert!(submits_input("Enter", false));
        assert!(!submits_input("Enter", true));
        assert!(!submits_input("a", false));
        assert!(!submits_input("NumpadEnter", false));
    }
}
