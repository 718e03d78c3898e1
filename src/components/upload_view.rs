//! Upload View
//!
//! Bulk CSV import: format instructions, sample download, the drop zone and
//! the normalized upload outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::toast::use_toaster;
use crate::components::{SelectedFile, UploadZone};
use crate::context::AppContext;
use crate::models::UploadOutcome;
use crate::session::use_session;

const SAMPLE_CSV: &str = "name,type,date,year,spouse,phone_number\n\
John Smith,birthday,03-15,1985,,+1234567890\n\
Mary Johnson,birthday,07-22,1990,,+1234567891\n\
David and Sarah Wilson,anniversary,06-10,2015,Sarah Wilson,+1234567892\n\
Michael Brown,birthday,12-05,1978,,+1234567893\n";

fn size_label(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

fn download_sample_csv() -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(SAMPLE_CSV));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download("sample_people.csv");
    let body = document.body().ok_or("no body")?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[component]
pub fn UploadView() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (file, set_file) = signal(Option::<SelectedFile>::None);
    let (uploading, set_uploading) = signal(false);
    let (outcome, set_outcome) = signal(Option::<UploadOutcome>::None);

    let file_label = Signal::derive(move || {
        file.with(|file| {
            file.as_ref()
                .map(|file| format!("{} ({})", file.name, size_label(file.size_bytes)))
        })
    });

    let on_sample = move |_| {
        if download_sample_csv().is_ok() {
            toaster.success("Sample CSV downloaded!");
        }
    };

    let upload = move |_| {
        let Some(selected) = file.get() else {
            toaster.error("Please select a file first");
            return;
        };
        set_uploading.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.upload_csv(&selected.name, selected.bytes).await {
                Ok(result) => {
                    match &result {
                        UploadOutcome::Accepted { message, .. } => toaster.success(message.clone()),
                        UploadOutcome::Completed { processed, .. } => {
                            toaster.success(format!("Successfully processed {} records!", processed));
                        }
                        UploadOutcome::Failed { error } => toaster.error(error.clone()),
                    }
                    set_outcome.set(Some(result));
                    // The people list may have changed either way.
                    ctx.reload();
                }
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to upload file");
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="page upload-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"CSV Upload"</h1>
                    <p class="page-subtitle">"Upload member data in bulk using CSV files"</p>
                </div>
            </div>

            <div class="upload-columns">
                <div class="upload-main">
                    <div class="upload-instructions">
                        <h3>"CSV Format Requirements"</h3>
                        <ul>
                            <li><strong>"Required columns: "</strong>"name, type, date"</li>
                            <li><strong>"Optional columns: "</strong>"year, spouse, phone_number"</li>
                            <li><strong>"Type values: "</strong>"\"birthday\" or \"anniversary\""</li>
                            <li><strong>"Date format: "</strong>"MM-DD (e.g. \"03-15\" for March 15)"</li>
                            <li><strong>"Year: "</strong>"birth year or marriage year"</li>
                        </ul>
                    </div>

                    <button class="btn secondary" on:click=on_sample>
                        "Download Sample CSV"
                    </button>

                    <UploadZone
                        selected=file_label
                        on_select=move |selected: SelectedFile| {
                            set_file.set(Some(selected));
                            set_outcome.set(None);
                        }
                    />

                    <div class="upload-actions">
                        <button
                            class="btn primary"
                            disabled=move || file.with(|file| file.is_none()) || uploading.get()
                            on:click=upload
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload CSV" }}
                        </button>
                        <Show when=move || file.with(|file| file.is_some())>
                            <button
                                class="btn secondary"
                                on:click=move |_| {
                                    set_file.set(None);
                                    set_outcome.set(None);
                                }
                            >
                                "Clear"
                            </button>
                        </Show>
                    </div>
                </div>

                <div class="upload-result">
                    {move || outcome.get().map(|outcome| match outcome {
                        UploadOutcome::Accepted { message, filename } => view! {
                            <div class="result-card success">
                                <h3>"Upload accepted"</h3>
                                <p>{message}</p>
                                {filename.map(|name| view! { <p class="result-filename">{name}</p> })}
                            </div>
                        }.into_any(),
                        UploadOutcome::Completed { processed, added, updated } => view! {
                            <div class="result-card success">
                                <h3>"Import complete"</h3>
                                <p>{format!("{} records processed", processed)}</p>
                                <p>{format!("{} added, {} updated", added, updated)}</p>
                            </div>
                        }.into_any(),
                        UploadOutcome::Failed { error } => view! {
                            <div class="result-card error">
                                <h3>"Upload failed"</h3>
                                <p>{error}</p>
                            </div>
                        }.into_any(),
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_rounds_to_tenth_of_kb() {
        assert_eq!(size_label(1024.0), "1.0 KB");
        assert_eq!(size_label(1536.0), "1.5 KB");
        assert_eq!(size_label(100.0), "0.1 KB");
    }

    #[test]
    fn test_sample_csv_has_expected_header() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        assert_eq!(header, "name,type,date,year,spouse,phone_number");
        assert_eq!(SAMPLE_CSV.lines().count(), 5);
    }
}
