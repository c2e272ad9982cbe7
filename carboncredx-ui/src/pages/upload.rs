//! Document Upload Page
//!
//! Certificates go through the simulated verifier; the page re-arms a
//! [`Wakeup`] for the pipeline's next deadline after every change.

use leptos::*;

use carboncredx::clock::{Clock, SystemClock};
use carboncredx::upload::{
    Banner, DocumentId, DocumentStatus, FileMeta, RandomAssessor, UploadPipeline,
    UploadedDocument,
};

use crate::components::{FilePicker, InlineLoading};
use crate::state::{AppState, Wakeup};

type Pipeline = UploadPipeline<RandomAssessor>;

/// Document upload page component
#[component]
pub fn DocumentUpload() -> impl IntoView {
    let state = expect_context::<AppState>();
    let config = state.config.with_value(|c| c.simulation.clone());

    let pipeline = create_rw_signal(UploadPipeline::new(RandomAssessor::new(&config), &config));
    let wakeup = Wakeup::new();
    let accept = pipeline.with_untracked(|p| p.accept_filter().html_accept());

    let on_files = move |files: Vec<FileMeta>| {
        pipeline.update(|p| {
            p.select_files(files, SystemClock.now());
        });
        schedule(pipeline, wakeup, state);
    };

    let on_remove = move |id: DocumentId| {
        let removed = pipeline.try_update(|p| p.remove(id));
        if let Some(Err(e)) = removed {
            state.show_error(&e.to_string());
        }
        schedule(pipeline, wakeup, state);
    };

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Document Upload & AI Verification"</h1>
                <p class="text-gray-400">
                    "Upload carbon credit certificates for instant AI-powered verification and tokenization"
                </p>
            </div>

            <div class="grid lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 space-y-4">
                    <FilePicker
                        accept=accept
                        multiple=true
                        label="Click to select carbon credit certificates"
                        on_files=on_files
                    />

                    // Status banner
                    {move || pipeline.with(|p| p.banner().cloned()).map(|banner| view! {
                        <BannerLine banner=banner />
                    })}

                    // Uploaded documents
                    <div class="space-y-3">
                        <For
                            each=move || pipeline.with(|p| p.documents().to_vec())
                            key=|doc| (doc.id, doc.status.label())
                            children=move |doc| view! {
                                <DocumentRow doc=doc on_remove=on_remove />
                            }
                        />
                    </div>

                    <Show when=move || pipeline.with(|p| p.total_credits() > 0)>
                        <div class="bg-green-900/40 border border-green-700 rounded-lg p-4 text-green-300">
                            {move || format!(
                                "{} carbon credits verified and ready for tokenization",
                                pipeline.with(|p| p.total_credits())
                            )}
                        </div>
                    </Show>
                </section>

                // Verification progress
                <section class="bg-gray-800 rounded-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Verification Process"</h2>
                    <ol class="space-y-4">
                        {move || pipeline.with(|p| p.verification_steps()).into_iter().map(|step| {
                            let marker = if step.completed {
                                "bg-green-600"
                            } else if step.active {
                                "bg-yellow-600 animate-pulse"
                            } else {
                                "bg-gray-600"
                            };
                            view! {
                                <li class="flex items-start space-x-3">
                                    <span class=format!("w-8 h-8 rounded-full flex items-center justify-center text-sm {}", marker)>
                                        {if step.completed { "✓".to_string() } else { step.number.to_string() }}
                                    </span>
                                    <div>
                                        <div class="font-medium">{step.title}</div>
                                        <div class="text-xs text-gray-400">{step.description}</div>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ol>
                </section>
            </div>
        </div>
    }
}

/// Wake up for the earliest pending transition, if any
fn schedule(pipeline: RwSignal<Pipeline>, wakeup: Wakeup, state: AppState) {
    let due = pipeline.with_untracked(|p| p.next_due());
    wakeup.arm(due, move || {
        let changes = pipeline
            .try_update(|p| p.advance(SystemClock.now()))
            .unwrap_or_default();
        for change in &changes {
            if let DocumentStatus::Verified { credits } = change.status {
                state.show_success(&format!("{} verified: {} credits", change.name, credits));
            }
        }
        schedule(pipeline, wakeup, state);
    });
}

#[component]
fn BannerLine(banner: Banner) -> impl IntoView {
    let class = match banner {
        Banner::Processing => "bg-blue-900/40 border-blue-700 text-blue-300",
        Banner::Verified => "bg-green-900/40 border-green-700 text-green-300",
        Banner::Rejected(_) => "bg-red-900/40 border-red-700 text-red-300",
    };
    let busy = banner == Banner::Processing;

    view! {
        <div class=format!("flex items-center space-x-2 border rounded-lg px-4 py-3 {}", class)>
            {busy.then(|| view! { <InlineLoading /> })}
            <span>{banner.message()}</span>
        </div>
    }
}

#[component]
fn DocumentRow<F>(doc: UploadedDocument, on_remove: F) -> impl IntoView
where
    F: Fn(DocumentId) + Copy + 'static,
{
    let id = doc.id;
    let (badge, detail) = match &doc.status {
        DocumentStatus::Uploaded => ("bg-gray-600", None),
        DocumentStatus::Processing => ("bg-yellow-600", None),
        DocumentStatus::Verified { credits } => {
            ("bg-green-600", Some(format!("{} carbon credits", credits)))
        }
        DocumentStatus::Rejected { reason } => ("bg-red-600", Some(reason.to_string())),
    };

    view! {
        <div class="flex items-center justify-between bg-gray-800 rounded-lg p-4">
            <div>
                <div class="font-medium">{doc.name.clone()}</div>
                <div class="text-xs text-gray-400">
                    {format!("{} • {}", doc.size_label(), doc.uploaded_at.format("%H:%M:%S"))}
                </div>
                {detail.map(|text| view! { <div class="text-sm text-gray-300 mt-1">{text}</div> })}
            </div>
            <div class="flex items-center space-x-3">
                <span class=format!("px-2 py-1 rounded text-xs capitalize {}", badge)>
                    {doc.status.label()}
                </span>
                <button
                    on:click=move |_| on_remove(id)
                    class="text-gray-400 hover:text-red-400"
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
