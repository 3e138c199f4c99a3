use std::{future::Future, rc::Rc};

use super::{
    ConsoleEntry, ConsoleError, DialogContent, DialogError, DialogKind, DialogSurface,
    DialogTrigger, FadeDirection, ModalSession,
};

/// Title shown on the loader dialog.
pub const LOADER_TITLE: &str = "Loading";

#[derive(Clone)]
/// The five dialog surfaces a page provides, bound once at startup.
pub struct DialogSurfaces {
    /// Alert surface.
    pub alert: Rc<dyn DialogSurface>,
    /// Confirm surface.
    pub confirm: Rc<dyn DialogSurface>,
    /// Prompt surface.
    pub prompt: Rc<dyn DialogSurface>,
    /// Loader surface.
    pub loader: Rc<dyn DialogSurface>,
    /// Console surface.
    pub console: Rc<dyn DialogSurface>,
}

impl DialogSurfaces {
    /// Surface bound for `kind`.
    pub fn get(&self, kind: DialogKind) -> &dyn DialogSurface {
        match kind {
            DialogKind::Alert => self.alert.as_ref(),
            DialogKind::Confirm => self.confirm.as_ref(),
            DialogKind::Prompt => self.prompt.as_ref(),
            DialogKind::Loader => self.loader.as_ref(),
            DialogKind::Console => self.console.as_ref(),
        }
    }
}

#[derive(Clone)]
/// Alert, confirm, prompt, loader, and console operations over injected dialog surfaces.
///
/// Each operation runs one [`ModalSession`] on its kind's surface. Running two sessions of the
/// same kind at once is not supported; the second one takes over the shared element.
pub struct DialogService {
    surfaces: DialogSurfaces,
}

impl DialogService {
    /// Wraps already bound surfaces.
    pub fn new(surfaces: DialogSurfaces) -> Self {
        Self { surfaces }
    }

    /// Shows a message and waits until the dialog is closed by any path.
    ///
    /// # Errors
    ///
    /// Returns an error when the alert dialog cannot be shown or armed.
    pub async fn alert(&self, message: &str, title: &str) -> Result<(), DialogError> {
        self.run(DialogKind::Alert, DialogContent::new(title, message))
            .await
            .map(|_| ())
    }

    /// Asks a yes/no question. Resolves `true` only when the accept control fires.
    ///
    /// # Errors
    ///
    /// Returns an error when the confirm dialog cannot be shown or armed.
    pub async fn confirm(&self, message: &str, title: &str) -> Result<bool, DialogError> {
        let trigger = self
            .run(DialogKind::Confirm, DialogContent::new(title, message))
            .await?;
        Ok(trigger == DialogTrigger::Accept)
    }

    /// Asks for text. Resolves with the input on accept and `None` on any other path.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt dialog cannot be shown or armed.
    pub async fn prompt(
        &self,
        message: &str,
        title: &str,
        initial: Option<&str>,
    ) -> Result<Option<String>, DialogError> {
        let mut content = DialogContent::new(title, message);
        content.input = initial.map(str::to_string);

        let surface = self.surfaces.get(DialogKind::Prompt);
        let mut session = ModalSession::open(surface, &content, DialogKind::Prompt.triggers())?;
        let value = match session.wait().await {
            DialogTrigger::Accept => Some(surface.input_value().unwrap_or_default()),
            DialogTrigger::Close | DialogTrigger::Decline => None,
        };
        session.close();
        Ok(value)
    }

    /// Shows the loader around `work` and returns its outcome untouched.
    ///
    /// The loader fades in before `work` is awaited and always fades out and hides afterwards,
    /// so a failed `work` is reported only once the dialog is gone.
    ///
    /// # Errors
    ///
    /// Returns `work`'s error, or the loader dialog failure converted into `E`.
    pub async fn loader<F, T, E>(&self, message: &str, work: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<DialogError>,
    {
        let surface = self.surfaces.get(DialogKind::Loader);
        let session = ModalSession::open(
            surface,
            &DialogContent::new(LOADER_TITLE, message),
            DialogKind::Loader.triggers(),
        )?;
        surface.fade(FadeDirection::In).await;
        let outcome = work.await;
        surface.fade(FadeDirection::Out).await;
        session.close();
        outcome
    }

    /// Appends a line to the console dialog and reveals it without blocking the page.
    ///
    /// # Errors
    ///
    /// Fails immediately for an unknown `level`, or when the console dialog cannot be written.
    pub fn log(&self, level: &str, message: &str) -> Result<(), ConsoleError> {
        let entry = ConsoleEntry::parse(level, message)?;
        self.log_entry(&entry)
    }

    /// Typed form of [`DialogService::log`].
    ///
    /// # Errors
    ///
    /// Returns an error when the console dialog cannot be written.
    pub fn log_entry(&self, entry: &ConsoleEntry) -> Result<(), ConsoleError> {
        let console = self.surfaces.get(DialogKind::Console);
        console.append_entry(entry)?;
        console.reveal()?;
        Ok(())
    }

    /// Empties and hides the console dialog.
    pub fn clear_console(&self) {
        let console = self.surfaces.get(DialogKind::Console);
        console.clear_entries();
        console.dismiss();
    }

    async fn run(
        &self,
        kind: DialogKind,
        content: DialogContent,
    ) -> Result<DialogTrigger, DialogError> {
        let mut session = ModalSession::open(self.surfaces.get(kind), &content, kind.triggers())?;
        let trigger = session.wait().await;
        session.close();
        Ok(trigger)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::{executor::block_on, future::join};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialog::{DialogTone, LogLevel, MemoryDialogSet};

    #[test]
    fn alert_resolves_on_close_and_applies_tone() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();

        let (result, ()) = block_on(join(service.alert("Disk full", "Error"), async {
            let state = dialogs.alert.state();
            assert!(state.open && state.modal);
            assert_eq!(state.tone, Some(DialogTone::Error));
            assert_eq!(state.body, "Disk full");
            dialogs.alert.fire(DialogTrigger::Close);
        }));

        assert_eq!(result, Ok(()));
        assert!(!dialogs.alert.is_open());
        assert_eq!(dialogs.alert.listener_count(), 0);
    }

    #[test]
    fn confirm_accept_resolves_true() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();

        let (result, ()) = block_on(join(service.confirm("Delete?", "Warning"), async {
            assert_eq!(dialogs.confirm.state().tone, Some(DialogTone::Warning));
            dialogs.confirm.fire(DialogTrigger::Accept);
        }));

        assert_eq!(result, Ok(true));
        assert!(!dialogs.confirm.is_open());
        assert_eq!(dialogs.confirm.state().dismiss_count, 1);
    }

    #[test]
    fn confirm_decline_or_close_resolves_false() {
        for trigger in [DialogTrigger::Decline, DialogTrigger::Close] {
            let dialogs = MemoryDialogSet::default();
            let service = dialogs.service();

            let (result, ()) = block_on(join(service.confirm("Delete?", "Confirm"), async {
                dialogs.confirm.fire(trigger);
            }));

            assert_eq!(result, Ok(false), "{trigger:?}");
            assert_eq!(dialogs.confirm.listener_count(), 0);
        }
    }

    #[test]
    fn confirm_settles_once_whatever_the_order() {
        let orders = [
            [DialogTrigger::Accept, DialogTrigger::Decline, DialogTrigger::Close],
            [DialogTrigger::Decline, DialogTrigger::Accept, DialogTrigger::Close],
            [DialogTrigger::Close, DialogTrigger::Accept, DialogTrigger::Decline],
        ];
        for order in orders {
            let dialogs = MemoryDialogSet::default();
            let service = dialogs.service();

            let (result, ()) = block_on(join(service.confirm("Go?", "Confirm"), async {
                for trigger in order {
                    dialogs.confirm.fire(trigger);
                }
            }));

            assert_eq!(result, Ok(order[0] == DialogTrigger::Accept), "{order:?}");
            assert!(!dialogs.confirm.fire(DialogTrigger::Accept));
        }
    }

    #[test]
    fn prompt_accept_returns_typed_text() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();

        let (result, ()) = block_on(join(service.prompt("Name?", "Prompt", None), async {
            dialogs.prompt.type_input("abc");
            dialogs.prompt.fire(DialogTrigger::Accept);
        }));

        assert_eq!(result, Ok(Some("abc".to_string())));
        assert!(!dialogs.prompt.is_open());
    }

    #[test]
    fn prompt_close_without_accept_returns_none() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();

        let (result, ()) = block_on(join(service.prompt("Name?", "Prompt", Some("x")), async {
            assert_eq!(dialogs.prompt.state().input, Some("x".to_string()));
            dialogs.prompt.type_input("abc");
            dialogs.prompt.fire(DialogTrigger::Close);
        }));

        assert_eq!(result, Ok(None));
    }

    #[derive(Debug, PartialEq)]
    enum SaveError {
        Rejected,
        Dialog(DialogError),
    }

    impl From<DialogError> for SaveError {
        fn from(err: DialogError) -> Self {
            Self::Dialog(err)
        }
    }

    #[test]
    fn loader_wraps_work_and_always_cleans_up() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();
        let observed_open = Cell::new(false);

        let ok: Result<u32, SaveError> = block_on(service.loader("Saving", async {
            observed_open.set(dialogs.loader.is_open());
            Ok(7)
        }));
        assert_eq!(ok, Ok(7));
        assert!(observed_open.get());

        let failed: Result<u32, SaveError> = block_on(service.loader("Saving", async {
            Err(SaveError::Rejected)
        }));
        assert_eq!(failed, Err(SaveError::Rejected));

        let state = dialogs.loader.state();
        assert!(!state.open);
        assert_eq!(state.title, LOADER_TITLE);
        assert_eq!(
            state.fades,
            vec![
                FadeDirection::In,
                FadeDirection::Out,
                FadeDirection::In,
                FadeDirection::Out
            ]
        );
        assert_eq!(state.dismiss_count, 2);

        dialogs.loader.fail_next_arm("detached");
        let unavailable: Result<u32, SaveError> =
            block_on(service.loader("Saving", async { Ok(1) }));
        assert!(matches!(
            unavailable,
            Err(SaveError::Dialog(DialogError::Arm { .. }))
        ));
        assert!(!dialogs.loader.is_open());
    }

    #[test]
    fn console_log_appends_and_reveals() {
        let dialogs = MemoryDialogSet::default();
        let service = dialogs.service();

        service.log("warn", "low battery").expect("log");
        let state = dialogs.console.state();
        assert!(state.open);
        assert!(!state.modal);
        assert_eq!(
            state.entries,
            vec![ConsoleEntry {
                level: LogLevel::Warn,
                message: "low battery".to_string()
            }]
        );

        assert_eq!(
            service.log("shout", "x"),
            Err(ConsoleError::UnknownLevel("shout".to_string()))
        );
        assert_eq!(dialogs.console.state().entries.len(), 1);

        service.clear_console();
        let state = dialogs.console.state();
        assert!(state.entries.is_empty());
        assert!(!state.open);
    }

    #[test]
    fn arm_failure_is_reported() {
        let dialogs = MemoryDialogSet::default();
        dialogs.confirm.fail_next_arm("no listeners");
        let result = block_on(dialogs.service().confirm("?", "Confirm"));
        assert!(matches!(result, Err(DialogError::Arm { .. })));
        assert!(!dialogs.confirm.is_open());
    }
}
