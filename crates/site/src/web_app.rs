use leptos::*;
use leptos_meta::*;
use page_host::{DialogError, ErrorReport, LogLevel};
use page_host_web::{current_search_params, download_text, spawn_escalation, WebPageControl};
use page_ui::PageDialogs;

use crate::dialogs;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Page Dialogs" />
        <Meta name="description" content="Modal dialogs, lookup, and download helpers for the page." />

        <main class="site-root">
            <DialogDemo />
        </main>
        <PageDialogs />
    }
}

#[component]
pub fn DialogDemo() -> impl IntoView {
    let (last_result, set_last_result) = create_signal(String::from("-"));

    let run_alert = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        spawn_local(async move {
            let outcome = service.alert("Settings saved.", "Saved").await;
            set_last_result.set(format!("alert: {outcome:?}"));
        });
    };

    let run_confirm = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        spawn_local(async move {
            let outcome = service.confirm("Discard unsaved changes?", "Warning").await;
            set_last_result.set(format!("confirm: {outcome:?}"));
        });
    };

    let run_prompt = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        spawn_local(async move {
            let outcome = service.prompt("Name this file", "Rename", Some("untitled")).await;
            set_last_result.set(format!("prompt: {outcome:?}"));
        });
    };

    let run_loader = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        spawn_local(async move {
            let outcome: Result<usize, DialogError> = service
                .loader("Reading query string", async {
                    page_host_web::document_ready().await;
                    Ok(current_search_params().len())
                })
                .await;
            set_last_result.set(format!("loader: {outcome:?}"));
        });
    };

    let run_log = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        let message = format!("query: {:?}", current_search_params());
        if let Err(err) = service.log(LogLevel::Info.as_str(), &message) {
            logging::warn!("{err}");
        }
    };

    let run_download = move |_: ev::MouseEvent| {
        let text = current_search_params()
            .iter()
            .map(|(key, value)| format!("{key}={}", value.unwrap_or_default()))
            .collect::<Vec<_>>()
            .join("\n");
        if let Err(err) = download_text("query.txt", &text, "text/plain") {
            logging::warn!("{err}");
        }
    };

    let run_failure = move |_: ev::MouseEvent| {
        let Some(service) = dialogs() else { return };
        let report = ErrorReport::new("Error", "simulated failure");
        spawn_escalation(service, WebPageControl, report, false);
        set_last_result.set("failure logged".to_string());
    };

    view! {
        <section class="dialog-demo">
            <h1>"Page dialogs"</h1>
            <div class="dialog-demo-actions">
                <button type="button" on:click=run_alert>"Alert"</button>
                <button type="button" on:click=run_confirm>"Confirm"</button>
                <button type="button" on:click=run_prompt>"Prompt"</button>
                <button type="button" on:click=run_loader>"Loader"</button>
                <button type="button" on:click=run_log>"Log"</button>
                <button type="button" on:click=run_download>"Download query"</button>
                <button type="button" on:click=run_failure>"Log failure"</button>
            </div>
            <p class="dialog-demo-result">{move || last_result.get()}</p>
        </section>
    }
}
