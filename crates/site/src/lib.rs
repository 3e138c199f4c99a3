mod web_app;

use std::cell::RefCell;

use page_host::DialogService;

pub use web_app::{DialogDemo, SiteApp};

thread_local! {
    static DIALOGS: RefCell<Option<DialogService>> = const { RefCell::new(None) };
}

/// Dialog service bound at mount time, if binding succeeded.
pub fn dialogs() -> Option<DialogService> {
    DIALOGS.with(|dialogs| dialogs.borrow().clone())
}

/// Replaces the shared dialog service.
pub fn install_dialogs(service: DialogService) {
    DIALOGS.with(|dialogs| *dialogs.borrow_mut() = Some(service));
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> });

    match page_host_web::window_dialog_service(&page_host::PageConfig::default()) {
        Ok(service) => install_dialogs(service),
        Err(err) => leptos::logging::warn!("page dialogs unavailable: {err}"),
    }
}
