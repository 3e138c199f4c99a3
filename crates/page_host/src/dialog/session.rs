use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;

use super::{DialogContent, DialogError, DialogSurface, DialogTrigger, ListenerHandle, TriggerSink};

/// One open dialog interaction.
///
/// Opening shows the dialog and arms its triggers behind a single [`ListenerHandle`]. The first
/// trigger to fire is the session's outcome; later ones are ignored. Closing aborts the handle and
/// hides the dialog. Closing runs exactly once: on [`ModalSession::close`] or when the session is
/// dropped, including when a caller drops the pending future mid-wait.
pub struct ModalSession<'a> {
    surface: &'a dyn DialogSurface,
    listeners: Option<ListenerHandle>,
    outcome: oneshot::Receiver<DialogTrigger>,
}

impl<'a> ModalSession<'a> {
    /// Shows `content` on `surface` and arms `triggers`.
    ///
    /// # Errors
    ///
    /// Returns the surface's error when showing or arming fails. A dialog that was shown before
    /// arming failed is hidden again.
    pub fn open(
        surface: &'a dyn DialogSurface,
        content: &DialogContent,
        triggers: &[DialogTrigger],
    ) -> Result<Self, DialogError> {
        let (tx, outcome) = oneshot::channel();
        let sender = Rc::new(RefCell::new(Some(tx)));
        let sink: TriggerSink = Rc::new(move |trigger| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(trigger);
            }
        });

        surface.present(content)?;
        let listeners = match surface.arm(triggers, sink) {
            Ok(listeners) => listeners,
            Err(err) => {
                surface.dismiss();
                return Err(err);
            }
        };

        Ok(Self {
            surface,
            listeners: Some(listeners),
            outcome,
        })
    }

    /// Waits for the winning trigger.
    ///
    /// If the surface drops every listener without firing, the session counts as closed.
    pub async fn wait(&mut self) -> DialogTrigger {
        (&mut self.outcome).await.unwrap_or(DialogTrigger::Close)
    }

    /// Detaches every listener and hides the dialog.
    pub fn close(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.abort();
            self.surface.dismiss();
        }
    }
}

impl Drop for ModalSession<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, future::join, FutureExt};

    use super::*;
    use crate::dialog::{DialogKind, MemoryDialogSurface};

    fn content() -> DialogContent {
        DialogContent::new("Question", "Proceed?")
    }

    #[test]
    fn first_trigger_wins_and_cleanup_runs_once() {
        let surface = MemoryDialogSurface::new(DialogKind::Confirm);
        let mut session =
            ModalSession::open(&surface, &content(), DialogKind::Confirm.triggers())
                .expect("open session");

        assert!(surface.is_open());
        assert_eq!(surface.listener_count(), 3);

        let (trigger, ()) = block_on(join(session.wait(), async {
            assert!(surface.fire(DialogTrigger::Decline));
            assert!(surface.fire(DialogTrigger::Accept));
        }));
        assert_eq!(trigger, DialogTrigger::Decline);

        session.close();
        assert!(!surface.is_open());
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.state().dismiss_count, 1);
        assert!(!surface.fire(DialogTrigger::Close));
        assert_eq!(surface.state().dismiss_count, 1);
    }

    #[test]
    fn dropping_pending_wait_still_cleans_up() {
        let surface = MemoryDialogSurface::new(DialogKind::Alert);
        {
            let mut session = ModalSession::open(&surface, &content(), &[DialogTrigger::Close])
                .expect("open session");
            assert!(session.wait().now_or_never().is_none());
        }
        assert!(!surface.is_open());
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.state().dismiss_count, 1);
    }

    #[test]
    fn failed_arm_hides_dialog() {
        let surface = MemoryDialogSurface::new(DialogKind::Alert);
        surface.fail_next_arm("listener registry unavailable");

        let result = ModalSession::open(&surface, &content(), &[DialogTrigger::Close]);
        assert!(matches!(result, Err(DialogError::Arm { .. })));
        assert!(!surface.is_open());
    }

    #[test]
    fn lost_listeners_count_as_close() {
        let surface = MemoryDialogSurface::new(DialogKind::Prompt);
        let mut session = ModalSession::open(&surface, &content(), &[DialogTrigger::Accept])
            .expect("open session");
        surface.drop_listeners();
        assert_eq!(block_on(session.wait()), DialogTrigger::Close);
    }
}
