//! Gallery app for the shared themed primitive set.
//!
//! Renders every input variant and loader configuration through
//! `ui_primitives` so visual refinements can be reviewed against live
//! controlled state instead of static markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use ui_primitives::prelude::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FormState {
    title: String,
    quantity: String,
    passphrase: String,
}

impl FormState {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "quantity" => self.quantity = value,
            "passphrase" => self.passphrase = value,
            other => logging::warn!("gallery form has no field named {other}"),
        }
    }
}

#[component]
fn TokenReadout() -> impl IntoView {
    let theme = use_theme();

    view! {
        <dl class="gallery-tokens">
            <dt>"brand"</dt>
            <dd>{theme.palette.brand.clone()}</dd>
            <dt>"main"</dt>
            <dd>{theme.palette.main.clone()}</dd>
            <dt>"control font"</dt>
            <dd>{theme.size.px_to_rem(theme.size.font.tall)}</dd>
            <dt>"caption gap"</dt>
            <dd>{theme.spacing_by_char(1.0)}</dd>
        </dl>
    }
}

#[component]
/// Gallery window contents: the input family, loader grid, and a live JSON
/// readout of the controlled form state.
pub fn GalleryApp() -> impl IntoView {
    let form = create_rw_signal(FormState::default());

    let on_change = Callback::new(move |(name, value): (String, String)| {
        form.update(|form| form.set_field(&name, value));
    });
    let on_blur = Callback::new(move |(name, value): (String, String)| {
        logging::log!("field {name} settled at {value:?}");
    });

    let readout = move || {
        serde_json::to_string_pretty(&form.get()).unwrap_or_else(|err| {
            logging::warn!("gallery readout serialize failed: {err}");
            String::new()
        })
    };

    view! {
        <ThemeProvider>
            <main class="gallery-root">
                <section class="gallery-section">
                    <h2>"Input family"</h2>
                    <TextInput
                        value=Signal::derive(move || form.get().title)
                        name="title"
                        placeholder="Document title"
                        width=240
                        on_change=on_change
                        on_blur=on_blur
                    />
                    <NumberInput
                        value=Signal::derive(move || form.get().quantity)
                        name="quantity"
                        placeholder="0"
                        width=120
                        on_change=on_change
                        on_blur=on_blur
                    />
                    <PasswordInput
                        value=Signal::derive(move || form.get().passphrase)
                        name="passphrase"
                        required=true
                        width="50%"
                        on_change=on_change
                        on_blur=on_blur
                    />
                    <TextInput value="cannot touch this" name="frozen" disabled=true />
                    <TextInput value="birthday?" name="flagged" error=true />
                </section>

                <section class="gallery-section">
                    <h2>"Loaders"</h2>
                    <Loader />
                    <Loader size=LoaderSize::S />
                    <Loader text="Loading…" />
                    <Loader tone=LoaderTone::Light text="Syncing" attr:aria-live="polite" />
                    <Loader size=LoaderSize::S tone=LoaderTone::Light alt="Busy" />
                </section>

                <section class="gallery-section">
                    <h2>"Active theme tokens"</h2>
                    <TokenReadout />
                </section>

                <section class="gallery-section">
                    <h2>"Controlled state"</h2>
                    <pre><code>{readout}</code></pre>
                </section>
            </main>
        </ThemeProvider>
    }
}

/// Mounts the gallery to the document body in the browser workflow.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
