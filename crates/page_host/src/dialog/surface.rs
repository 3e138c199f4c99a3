use std::{future::Future, pin::Pin, rc::Rc};

use super::{ConsoleEntry, DialogContent, DialogError, DialogTrigger, FadeDirection};

/// Object-safe boxed future used by [`DialogSurface`] animations.
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Callback a surface invokes when an armed trigger fires.
pub type TriggerSink = Rc<dyn Fn(DialogTrigger)>;

/// Host-side control over one dialog element.
pub trait DialogSurface {
    /// Applies `content` and shows the dialog modally.
    fn present(&self, content: &DialogContent) -> Result<(), DialogError>;

    /// Shows the dialog without blocking the rest of the page.
    fn reveal(&self) -> Result<(), DialogError>;

    /// Hides the dialog. Hiding an already hidden dialog is a no-op.
    fn dismiss(&self);

    /// Attaches one listener per trigger, all sharing the returned cancellation handle.
    fn arm(&self, triggers: &[DialogTrigger], sink: TriggerSink)
        -> Result<ListenerHandle, DialogError>;

    /// Current text of the dialog's input, if it has one.
    fn input_value(&self) -> Option<String>;

    /// Plays a fade animation; resolves once it has finished.
    fn fade(&self, direction: FadeDirection) -> DialogFuture<'_, ()>;

    /// Appends one log line to the dialog body.
    fn append_entry(&self, entry: &ConsoleEntry) -> Result<(), DialogError>;

    /// Removes every appended log line.
    fn clear_entries(&self);
}

/// Shared cancellation for every listener armed in one session.
///
/// Aborting (or dropping) the handle detaches all of them. The abort action runs at most once.
pub struct ListenerHandle {
    abort: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    /// Wraps the action that detaches the session's listeners.
    pub fn new(abort: impl FnOnce() + 'static) -> Self {
        Self {
            abort: Some(Box::new(abort)),
        }
    }

    /// Handle for a session that armed nothing.
    pub fn inert() -> Self {
        Self { abort: None }
    }

    /// Detaches the listeners now.
    pub fn abort(mut self) {
        self.run_abort();
    }

    fn run_abort(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.run_abort();
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("armed", &self.abort.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn listener_handle_aborts_once() {
        let count = Rc::new(Cell::new(0));
        let counted = count.clone();
        let handle = ListenerHandle::new(move || counted.set(counted.get() + 1));
        handle.abort();
        assert_eq!(count.get(), 1);

        let counted = count.clone();
        drop(ListenerHandle::new(move || counted.set(counted.get() + 1)));
        assert_eq!(count.get(), 2);

        drop(ListenerHandle::inert());
        assert_eq!(count.get(), 2);
    }
}
