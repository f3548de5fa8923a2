use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::data::{Clearance, MissionFile, MISSION_FILES};

/// How long the decrypt overlay stays up before a file opens.
pub(crate) const DECRYPT_DELAY: Duration = Duration::from_millis(1_500);
const NOISE_LEN: usize = 20;
const REDACTED_BRIEF: &str = "XXX XX XXXXX XXXX XXXXXX XX XXXXX XXXX XXXXX XXX XXXX XX XXXXX";

/// Marks `id` decrypted. Returns `false` if it is unknown or already decrypted.
fn decrypt_file(files: &mut [MissionFile], id: &str) -> bool {
    match files
        .iter_mut()
        .find(|file| file.id == id && file.clearance == Clearance::Classified)
    {
        Some(file) => {
            file.clearance = Clearance::Decrypted;
            true
        }
        None => false,
    }
}

/// Cipher noise shown over a file while it decrypts, one char per `[0, 1)` sample.
fn cipher_noise(mut sample: impl FnMut() -> f64) -> String {
    (0..NOISE_LEN)
        .map(|_| char::from((sample().clamp(0.0, 0.999) * 50.0 + 60.0) as u8))
        .collect()
}

#[component]
fn MissionCard(
    file: MissionFile,
    decrypting: RwSignal<Option<(&'static str, String)>>,
    on_decrypt: Callback<&'static str>,
) -> impl IntoView {
    let classified = file.clearance == Clearance::Classified;
    let busy = move || decrypting.with(Option::is_some);
    let overlay = move || {
        decrypting.with(|current| match current {
            Some((id, noise)) if *id == file.id => Some(view! {
                <div data-ui-slot="decrypt-overlay">
                    <div>"DECRYPTING..."</div>
                    <div data-ui-slot="noise">{noise.clone()}</div>
                </div>
            }),
            _ => None,
        })
    };

    view! {
        <article
            data-ui-slot="mission"
            data-clearance=if classified { "classified" } else { "decrypted" }
        >
            {overlay}
            <header>
                <div>
                    <span data-ui-slot="label">"CODENAME:"</span>
                    <h3>{file.codename}</h3>
                </div>
                {if classified {
                    view! {
                        <button
                            type="button"
                            data-ui-slot="decrypt"
                            disabled=busy
                            on:click=move |_| on_decrypt.call(file.id)
                        >
                            <Icon icon=IconName::Lock size=IconSize::Xs />
                            "Encrypted"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <span data-ui-slot="decrypted">
                            <Icon icon=IconName::Unlock size=IconSize::Xs />
                            "Decrypted"
                        </span>
                    }
                    .into_view()
                }}
            </header>
            <p>
                <span data-ui-slot="label">"CLIENT:"</span>
                {if classified {
                    view! { <span data-ui-slot="redacted">"REDACTED"</span> }
                } else {
                    view! { <span>{file.client}</span> }
                }}
            </p>
            <p>
                <span data-ui-slot="label">"BRIEF:"</span>
                {if classified {
                    view! { <span data-ui-slot="redacted">{REDACTED_BRIEF}</span> }
                } else {
                    view! { <span>{file.description}</span> }
                }}
            </p>
            <footer>
                <div data-ui-slot="tech">
                    {file.tech.iter().map(|tech| view! { <span>{*tech}</span> }).collect_view()}
                </div>
                {(!classified)
                    .then_some(file.url)
                    .flatten()
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" data-ui-slot="launch">
                                "LAUNCH SYSTEM "
                                <Icon icon=IconName::ExternalLink size=IconSize::Xs />
                            </a>
                        }
                    })}
            </footer>
        </article>
    }
}

#[component]
/// Mission file list; classified entries stay redacted until decrypted.
pub fn ProjectsApp() -> impl IntoView {
    let files = create_rw_signal(MISSION_FILES.to_vec());
    let decrypting = create_rw_signal(None::<(&'static str, String)>);
    let pending = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let on_decrypt = Callback::new(move |id: &'static str| {
        if decrypting.with_untracked(Option::is_some) {
            return;
        }
        decrypting.set(Some((id, cipher_noise(crate::random_unit))));
        let finish = move || {
            files.update(|files| {
                decrypt_file(files, id);
            });
            decrypting.set(None);
        };
        match set_timeout_with_handle(finish, DECRYPT_DELAY) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("decrypt timer unavailable: {err:?}");
                finish();
            }
        }
    });

    view! {
        <div class="dossier-projects" data-app-view="projects">
            <header data-ui-slot="heading">
                <div>
                    <h2>"MISSION_FILES"</h2>
                    <p>"CLEARANCE LEVEL: TOP SECRET"</p>
                </div>
                <Icon icon=IconName::ShieldAlert size=IconSize::Md />
            </header>
            <div data-ui-slot="missions">
                <For each=move || files.get() key=|file| (file.id, file.clearance) let:file>
                    <MissionCard file=file decrypting=decrypting on_decrypt=on_decrypt />
                </For>
            </div>
        </div>
    }
}
