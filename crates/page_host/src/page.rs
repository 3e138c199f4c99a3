//! Page-level control contracts.

use std::{cell::Cell, rc::Rc};

/// Host control over the page as a whole.
pub trait PageControl {
    /// Discards the current page state and reloads it from the server.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the reload.
    fn reload(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Page control that ignores every request.
pub struct NoopPageControl;

impl PageControl for NoopPageControl {
    fn reload(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Page control that counts reload requests.
pub struct MemoryPageControl {
    reloads: Rc<Cell<usize>>,
}

impl MemoryPageControl {
    /// Number of reloads requested so far.
    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }
}

impl PageControl for MemoryPageControl {
    fn reload(&self) -> Result<(), String> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}
