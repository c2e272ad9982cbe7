//! KYC Page
//!
//! Four-step identity wizard over [`KycForm`].

use leptos::*;

use carboncredx::kyc::{KycDocument, KycForm, KycStep, AADHAAR_MAX_LEN, PAN_MAX_LEN};
use carboncredx::upload::FileMeta;

use crate::components::FilePicker;
use crate::state::AppState;

/// KYC wizard page component
#[component]
pub fn Kyc() -> impl IntoView {
    let form = create_rw_signal(KycForm::new());
    let step = create_memo(move |_| form.with(|f| f.step()));

    view! {
        <div class="container mx-auto px-4 py-8 max-w-3xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"KYC Verification"</h1>
                <p class="text-gray-400">"Complete your identity verification to start trading carbon credits"</p>
            </div>

            // Progress
            <ol class="flex items-center justify-between">
                {KycStep::all().into_iter().map(|s| view! {
                    <li class="flex flex-col items-center flex-1 text-center">
                        <span
                            class="w-10 h-10 rounded-full flex items-center justify-center font-bold bg-gray-700"
                            class:bg-green-600=move || form.with(|f| f.is_reached(s))
                        >
                            {s.number()}
                        </span>
                        <span class="text-xs text-gray-400 mt-2">{s.title()}</span>
                    </li>
                }).collect_view()}
            </ol>

            <section class="bg-gray-800 rounded-lg p-6">
                {move || match step.get() {
                    KycStep::PersonalInformation => view! { <PersonalStep form=form /> }.into_view(),
                    KycStep::DocumentUpload => view! { <DocumentStep form=form /> }.into_view(),
                    KycStep::BiometricVerification => view! { <BiometricStep form=form /> }.into_view(),
                    KycStep::VerificationComplete => view! { <CompleteStep form=form /> }.into_view(),
                }}

                // Navigation buttons, absent on the final panel
                {move || form.with(|f| f.primary_label()).map(|label| view! {
                    <div class="flex justify-between mt-8">
                        <button
                            on:click=move |_| { form.update(|f| { f.prev(); }); }
                            disabled=move || !form.with(|f| f.can_go_back())
                            class="px-6 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 disabled:opacity-50"
                        >
                            "Previous"
                        </button>
                        <button
                            on:click=move |_| { form.update(|f| { f.next(); }); }
                            class="px-6 py-2 rounded-lg bg-green-600 hover:bg-green-700"
                        >
                            {label}
                        </button>
                    </div>
                })}
            </section>
        </div>
    }
}

#[component]
fn PersonalStep(form: RwSignal<KycForm>) -> impl IntoView {
    let field = move |read: fn(&KycForm) -> String| Signal::derive(move || form.with(read));

    view! {
        <h2 class="text-xl font-semibold mb-4">"Personal Information"</h2>
        <div class="grid md:grid-cols-2 gap-4">
            <TextField
                label="Full Name"
                value=field(|f| f.details().full_name.clone())
                on_input=move |v: String| form.update(|f| f.set_full_name(&v))
            />
            <TextField
                label="Date of Birth"
                input_type="date"
                value=field(|f| f.details().date_of_birth.clone())
                on_input=move |v: String| form.update(|f| f.set_date_of_birth(&v))
            />
            <TextField
                label="PAN Number"
                placeholder="ABCDE1234F"
                maxlength=PAN_MAX_LEN
                value=field(|f| f.details().pan_number.clone())
                on_input=move |v: String| form.update(|f| f.set_pan_number(&v))
            />
            <div>
                <TextField
                    label="Aadhaar Number"
                    placeholder="123456789012"
                    maxlength=AADHAAR_MAX_LEN
                    input_type=Signal::derive(move || {
                        if form.with(|f| f.is_aadhaar_visible()) { "text" } else { "password" }
                    })
                    value=field(|f| f.details().aadhaar_number.clone())
                    on_input=move |v: String| form.update(|f| f.set_aadhaar_number(&v))
                />
                <button
                    on:click=move |_| form.update(|f| f.toggle_aadhaar_visibility())
                    class="text-xs text-green-400 mt-1"
                >
                    {move || if form.with(|f| f.is_aadhaar_visible()) { "Hide" } else { "Show" }}
                </button>
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm text-gray-400 mb-1">"Address"</label>
                <textarea
                    rows="3"
                    class="w-full bg-gray-700 rounded-lg px-3 py-2"
                    prop:value=move || form.with(|f| f.details().address.clone())
                    on:input=move |ev| form.update(|f| f.set_address(&event_target_value(&ev)))
                />
            </div>
        </div>

        // Format hints never block progress
        <div class="mt-4 space-y-1 text-xs text-yellow-400">
            {move || form.with(|f| f.pan_hint()).map(|hint| view! { <p>{hint}</p> })}
            {move || form.with(|f| f.aadhaar_hint()).map(|hint| view! { <p>{hint}</p> })}
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(into, default = "text".into())]
    input_type: MaybeSignal<&'static str>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    maxlength: Option<usize>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-1">{label}</label>
            <input
                type=move || input_type.get()
                placeholder=placeholder
                maxlength=maxlength.map(|n| n.to_string())
                class="w-full bg-gray-700 rounded-lg px-3 py-2"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn DocumentStep(form: RwSignal<KycForm>) -> impl IntoView {
    view! {
        <h2 class="text-xl font-semibold mb-4">"Document Upload"</h2>
        <div class="grid md:grid-cols-2 gap-4">
            <DocumentSlot form=form slot=KycDocument::Aadhaar label="Aadhaar offline e-KYC (XML/ZIP)" />
            <DocumentSlot form=form slot=KycDocument::Pan label="PAN card image" />
        </div>
    }
}

#[component]
fn DocumentSlot(form: RwSignal<KycForm>, slot: KycDocument, label: &'static str) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_files = move |files: Vec<FileMeta>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        if let Some(Err(e)) = form.try_update(|f| f.attach(slot, file)) {
            state.show_error(&e.to_string());
        }
    };

    view! {
        <div class="space-y-2">
            <FilePicker
                accept=slot.accept_filter().html_accept()
                label=label
                on_files=on_files
            />
            {move || form.with(|f| f.document(slot).map(|doc| doc.name.clone())).map(|name| view! {
                <p class="text-sm text-green-400">{format!("✓ {}", name)}</p>
            })}
        </div>
    }
}

#[component]
fn BiometricStep(form: RwSignal<KycForm>) -> impl IntoView {
    let captured = move || form.with(|f| f.has_selfie());

    view! {
        <h2 class="text-xl font-semibold mb-4">"Biometric Verification"</h2>
        <div class="flex flex-col items-center space-y-4">
            <div class="w-48 h-48 rounded-full bg-gray-700 flex items-center justify-center text-6xl">
                {move || if captured() { "😊" } else { "📷" }}
            </div>
            <button
                on:click=move |_| form.update(|f| f.capture_selfie())
                disabled=captured
                class="px-6 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
            >
                {move || if captured() { "Selfie Captured" } else { "Capture Selfie" }}
            </button>
            <p class="text-xs text-gray-400">"Position your face within the circle and look at the camera"</p>
        </div>
    }
}

#[component]
fn CompleteStep(form: RwSignal<KycForm>) -> impl IntoView {
    let details = form.with_untracked(|f| f.details().clone());
    let aadhaar = form.with_untracked(|f| f.aadhaar_display());

    view! {
        <div class="text-center space-y-4">
            <div class="text-6xl">"✅"</div>
            <h2 class="text-2xl font-bold">"Verification Complete"</h2>
            <p class="text-gray-400">
                "Your identity has been verified. You can now tokenize and trade carbon credits."
            </p>
            <dl class="inline-grid grid-cols-2 gap-x-6 gap-y-1 text-sm text-left">
                <dt class="text-gray-400">"Name"</dt>
                <dd>{details.full_name}</dd>
                <dt class="text-gray-400">"PAN"</dt>
                <dd>{details.pan_number}</dd>
                <dt class="text-gray-400">"Aadhaar"</dt>
                <dd>{aadhaar}</dd>
                <dt class="text-gray-400">"Status"</dt>
                <dd class="capitalize text-green-400">
                    {move || form.with(|f| f.status().to_string())}
                </dd>
            </dl>
        </div>
    }
}
