//! Upload Drop Zone Component
//!
//! CSV drag-and-drop target with a file-input fallback. The chosen file is
//! read into memory here so the rest of the app deals in plain data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use crate::components::toast::use_toaster;

/// A chosen CSV, fully read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: f64,
    pub bytes: Vec<u8>,
}

pub fn is_csv(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv")
}

async fn read_file(file: web_sys::File) -> Result<SelectedFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile {
        name: file.name(),
        size_bytes: file.size(),
        bytes,
    })
}

/// Drop zone for CSV files; rejects anything else with a toast.
#[component]
pub fn UploadZone(
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<SelectedFile>,
) -> impl IntoView {
    let toaster = use_toaster();
    let (drag_active, set_drag_active) = signal(false);

    let accept_file = move |file: web_sys::File| {
        if !is_csv(&file.name()) {
            toaster.error("Please select a CSV file");
            return;
        }
        spawn_local(async move {
            match read_file(file).await {
                Ok(selected) => on_select.run(selected),
                Err(message) => toaster.error(message),
            }
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        {
            accept_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
        // Allow re-selecting the same file after a failed upload.
        input.set_value("");
    };

    view! {
        <div
            class=move || if drag_active.get() { "upload-zone active" } else { "upload-zone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || match selected.get() {
                Some(label) => view! {
                    <p class="upload-zone-file">{label}</p>
                }.into_any(),
                None => view! {
                    <p class="upload-zone-hint">"Drop your CSV file here, or browse below"</p>
                }.into_any(),
            }}
            <input type="file" accept=".csv" class="upload-zone-input" on:change=on_input_change />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv_by_extension() {
        assert!(is_csv("people.csv"));
        assert!(is_csv("PEOPLE.CSV"));
        assert!(!is_csv("people.xlsx"));
        assert!(!is_csv("csv"));
    }
}
