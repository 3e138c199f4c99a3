//! Target-independent page helpers and dialog contracts.
//!
//! This crate holds everything that does not need a live document: scalar math, query-string
//! parsing, error reports, the typed-lookup rules, configuration, and the modal dialog session
//! machinery behind [`DialogService`]. Browser bindings live in `page_host_web`; the in-memory
//! surfaces here back tests and non-browser targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dialog;
pub mod error_report;
pub mod lookup;
pub mod math;
pub mod page;
pub mod query;

pub use config::{DialogLayout, DialogSelectors, LoaderTiming, PageConfig};
pub use dialog::{
    ConsoleEntry, ConsoleError, DialogContent, DialogError, DialogFuture, DialogKind,
    DialogService, DialogSurface, DialogSurfaces, DialogTone, DialogTrigger, FadeDirection,
    ListenerHandle, LogLevel, MemoryDialogSet, MemoryDialogState, MemoryDialogSurface,
    ModalSession, TriggerSink, LOADER_TITLE,
};
pub use error_report::{ErrorReport, UNDEFINED_ERROR_MESSAGE};
pub use lookup::{settle_lookup, short_type_name, typed_all, typed_one, LookupError};
pub use math::{clamp, to_degrees, to_factor, to_radians, to_signed_factor};
pub use page::{MemoryPageControl, NoopPageControl, PageControl};
pub use query::SearchParams;
