//! File Picker Component
//!
//! Wraps `<input type="file">` and hands the selection over as [`FileMeta`].

use leptos::*;
use web_sys::HtmlInputElement;

use carboncredx::upload::{mime_for_name, FileMeta};

#[component]
pub fn FilePicker(
    /// Value of the `accept` attribute
    #[prop(into)]
    accept: String,
    #[prop(optional)]
    multiple: bool,
    #[prop(into)]
    label: String,
    #[prop(into)]
    on_files: Callback<Vec<FileMeta>>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let files = selected_files(&input);
        // Allow picking the same file again
        input.set_value("");
        if !files.is_empty() {
            on_files.call(files);
        }
    };

    view! {
        <label class="block cursor-pointer border-2 border-dashed border-gray-600 hover:border-green-500 rounded-lg p-8 text-center transition-colors">
            <span class="text-3xl block mb-2">"📄"</span>
            <span class="text-gray-300">{label}</span>
            <span class="block text-xs text-gray-500 mt-1">{format!("Accepted: {}", accept)}</span>
            <input
                type="file"
                class="hidden"
                accept=accept.clone()
                multiple=multiple
                on:change=on_change
            />
        </label>
    }
}

fn selected_files(input: &HtmlInputElement) -> Vec<FileMeta> {
    let Some(list) = input.files() else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let name = file.name();
            // Browsers leave the type empty for unknown extensions
            let mime = match file.type_() {
                t if t.is_empty() => mime_for_name(&name).unwrap_or_default().to_string(),
                t => t,
            };
            FileMeta::new(name, file.size() as u64, mime)
        })
        .collect()
}
