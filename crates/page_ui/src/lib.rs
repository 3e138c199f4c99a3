//! Leptos markup for the page's singleton dialogs.
//!
//! [`PageDialogs`] renders one `<dialog>` per [`DialogKind`] in the shape the default
//! [`page_host::PageConfig`] selectors and layout expect, so the browser dialog service can bind
//! them once the app is mounted. Styling hooks follow the `data-ui-*` attribute contract.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use page_host::DialogKind;

/// Class list of the `<dialog>` element rendered for `kind`.
pub fn dialog_class(kind: DialogKind, layout_class: Option<&'static str>) -> String {
    let base = format!("ui-page-dialog ui-page-dialog-{}", kind.as_str());
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base,
    }
}

/// Whether the dialog for `kind` renders accept and decline controls.
pub const fn has_choice_controls(kind: DialogKind) -> bool {
    matches!(kind, DialogKind::Confirm | DialogKind::Prompt)
}

#[component]
/// One page dialog: heading, content area, and the controls its kind needs.
///
/// The dialog service puts the tone class (`error`, `warning`, `highlight`) on the `<h2>`.
pub fn PageDialog(
    kind: DialogKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = "OK")] accept_label: &'static str,
    #[prop(default = "Cancel")] decline_label: &'static str,
) -> impl IntoView {
    let input = (kind == DialogKind::Prompt).then(|| {
        view! { <input type="text" class="ui-page-dialog-input" data-ui-slot="input" /> }
    });
    let footer = has_choice_controls(kind).then(|| {
        view! {
            <footer data-ui-slot="actions">
                <button type="button" class="accept" data-ui-variant="primary">
                    {accept_label}
                </button>
                <button type="button" class="decline" data-ui-variant="standard">
                    {decline_label}
                </button>
            </footer>
        }
    });
    let close = (kind == DialogKind::Alert).then(|| {
        view! {
            <form method="dialog" data-ui-slot="actions">
                <button type="submit" data-ui-variant="primary">{accept_label}</button>
            </form>
        }
    });

    view! {
        <dialog
            id=kind.dom_id()
            class=dialog_class(kind, layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-dialog"
            data-ui-dialog=kind.as_str()
        >
            <header data-ui-slot="header">
                <h2></h2>
            </header>
            <div class="content" data-ui-slot="content"></div>
            {input}
            {footer}
            {close}
        </dialog>
    }
}

#[component]
/// Every page dialog, in [`DialogKind::ALL`] order.
pub fn PageDialogs() -> impl IntoView {
    DialogKind::ALL
        .into_iter()
        .map(|kind| view! { <PageDialog kind=kind /> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_class_carries_kind_and_layout() {
        assert_eq!(
            dialog_class(DialogKind::Loader, None),
            "ui-page-dialog ui-page-dialog-loader"
        );
        assert_eq!(
            dialog_class(DialogKind::Alert, Some("wide")),
            "ui-page-dialog ui-page-dialog-alert wide"
        );
        assert_eq!(
            dialog_class(DialogKind::Alert, Some("")),
            "ui-page-dialog ui-page-dialog-alert"
        );
    }

    #[test]
    fn only_questions_render_choice_controls() {
        let with_controls: Vec<_> = DialogKind::ALL
            .into_iter()
            .filter(|kind| has_choice_controls(*kind))
            .collect();
        assert_eq!(with_controls, vec![DialogKind::Confirm, DialogKind::Prompt]);
    }
}
