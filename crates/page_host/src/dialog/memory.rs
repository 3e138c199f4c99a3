use std::{cell::RefCell, rc::Rc};

use super::{
    ConsoleEntry, DialogContent, DialogError, DialogFuture, DialogKind, DialogService,
    DialogSurface, DialogSurfaces, DialogTone, DialogTrigger, FadeDirection, ListenerHandle,
    TriggerSink,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Observable state of a [`MemoryDialogSurface`].
pub struct MemoryDialogState {
    /// Whether the dialog is currently shown.
    pub open: bool,
    /// Whether the current showing is modal.
    pub modal: bool,
    /// Last applied title.
    pub title: String,
    /// Last applied tone.
    pub tone: Option<DialogTone>,
    /// Last applied body text.
    pub body: String,
    /// Current input text (prompt surfaces only).
    pub input: Option<String>,
    /// Number of `present` calls.
    pub present_count: usize,
    /// Number of `dismiss` calls that hid an open dialog.
    pub dismiss_count: usize,
    /// Fade animations played, in order.
    pub fades: Vec<FadeDirection>,
    /// Console entries appended and not yet cleared.
    pub entries: Vec<ConsoleEntry>,
}

struct Armed {
    triggers: Vec<DialogTrigger>,
    sink: TriggerSink,
}

#[derive(Clone)]
/// In-memory dialog surface for non-browser targets and tests.
///
/// User interaction is simulated with [`MemoryDialogSurface::fire`] and
/// [`MemoryDialogSurface::type_input`].
pub struct MemoryDialogSurface {
    kind: DialogKind,
    state: Rc<RefCell<MemoryDialogState>>,
    armed: Rc<RefCell<Option<Armed>>>,
    arm_failure: Rc<RefCell<Option<String>>>,
}

impl MemoryDialogSurface {
    /// Creates a hidden surface for `kind`.
    pub fn new(kind: DialogKind) -> Self {
        let state = MemoryDialogState {
            input: (kind == DialogKind::Prompt).then(String::new),
            ..MemoryDialogState::default()
        };
        Self {
            kind,
            state: Rc::new(RefCell::new(state)),
            armed: Rc::new(RefCell::new(None)),
            arm_failure: Rc::new(RefCell::new(None)),
        }
    }

    /// Snapshot of the surface state.
    pub fn state(&self) -> MemoryDialogState {
        self.state.borrow().clone()
    }

    /// Whether the dialog is shown.
    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    /// Number of listeners currently attached.
    pub fn listener_count(&self) -> usize {
        self.armed
            .borrow()
            .as_ref()
            .map_or(0, |armed| armed.triggers.len())
    }

    /// Simulates a user action. Returns whether an attached listener received it.
    ///
    /// A `Close` trigger also hides the dialog, as a native close would.
    pub fn fire(&self, trigger: DialogTrigger) -> bool {
        if trigger == DialogTrigger::Close {
            self.state.borrow_mut().open = false;
        }
        let sink = self
            .armed
            .borrow()
            .as_ref()
            .filter(|armed| armed.triggers.contains(&trigger))
            .map(|armed| armed.sink.clone());
        match sink {
            Some(sink) => {
                sink(trigger);
                true
            }
            None => false,
        }
    }

    /// Replaces the input text, as typing would.
    pub fn type_input(&self, text: &str) {
        if let Some(input) = self.state.borrow_mut().input.as_mut() {
            *input = text.to_string();
        }
    }

    /// Makes the next `arm` call fail with `reason`.
    pub fn fail_next_arm(&self, reason: &str) {
        *self.arm_failure.borrow_mut() = Some(reason.to_string());
    }

    /// Forgets attached listeners without firing them, as removing the element would.
    pub fn drop_listeners(&self) {
        self.armed.borrow_mut().take();
    }
}

impl DialogSurface for MemoryDialogSurface {
    fn present(&self, content: &DialogContent) -> Result<(), DialogError> {
        let mut state = self.state.borrow_mut();
        state.title = content.title.clone();
        state.tone = Some(content.tone);
        state.body = content.body.clone();
        if state.input.is_some() {
            state.input = Some(content.input.clone().unwrap_or_default());
        }
        state.open = true;
        state.modal = true;
        state.present_count += 1;
        Ok(())
    }

    fn reveal(&self) -> Result<(), DialogError> {
        let mut state = self.state.borrow_mut();
        if !state.open {
            state.open = true;
            state.modal = false;
        }
        Ok(())
    }

    fn dismiss(&self) {
        let mut state = self.state.borrow_mut();
        if state.open {
            state.open = false;
            state.dismiss_count += 1;
        }
    }

    fn arm(
        &self,
        triggers: &[DialogTrigger],
        sink: TriggerSink,
    ) -> Result<ListenerHandle, DialogError> {
        if let Some(reason) = self.arm_failure.borrow_mut().take() {
            return Err(DialogError::Arm {
                kind: self.kind,
                reason,
            });
        }
        if triggers.is_empty() {
            return Ok(ListenerHandle::inert());
        }
        *self.armed.borrow_mut() = Some(Armed {
            triggers: triggers.to_vec(),
            sink,
        });
        let armed = self.armed.clone();
        Ok(ListenerHandle::new(move || {
            armed.borrow_mut().take();
        }))
    }

    fn input_value(&self) -> Option<String> {
        self.state.borrow().input.clone()
    }

    fn fade(&self, direction: FadeDirection) -> DialogFuture<'_, ()> {
        self.state.borrow_mut().fades.push(direction);
        Box::pin(async {})
    }

    fn append_entry(&self, entry: &ConsoleEntry) -> Result<(), DialogError> {
        self.state.borrow_mut().entries.push(entry.clone());
        Ok(())
    }

    fn clear_entries(&self) {
        self.state.borrow_mut().entries.clear();
    }
}

#[derive(Clone)]
/// One in-memory surface per dialog kind.
pub struct MemoryDialogSet {
    /// Alert surface.
    pub alert: MemoryDialogSurface,
    /// Confirm surface.
    pub confirm: MemoryDialogSurface,
    /// Prompt surface.
    pub prompt: MemoryDialogSurface,
    /// Loader surface.
    pub loader: MemoryDialogSurface,
    /// Console surface.
    pub console: MemoryDialogSurface,
}

impl Default for MemoryDialogSet {
    fn default() -> Self {
        Self {
            alert: MemoryDialogSurface::new(DialogKind::Alert),
            confirm: MemoryDialogSurface::new(DialogKind::Confirm),
            prompt: MemoryDialogSurface::new(DialogKind::Prompt),
            loader: MemoryDialogSurface::new(DialogKind::Loader),
            console: MemoryDialogSurface::new(DialogKind::Console),
        }
    }
}

impl MemoryDialogSet {
    /// Dialog service driving these surfaces.
    pub fn service(&self) -> DialogService {
        DialogService::new(DialogSurfaces {
            alert: Rc::new(self.alert.clone()),
            confirm: Rc::new(self.confirm.clone()),
            prompt: Rc::new(self.prompt.clone()),
            loader: Rc::new(self.loader.clone()),
            console: Rc::new(self.console.clone()),
        })
    }
}
