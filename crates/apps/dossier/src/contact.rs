use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

const TRANSMIT_HOLD: Duration = Duration::from_millis(2_000);
const SENT_HOLD: Duration = Duration::from_millis(3_000);
const SIGNAL_BARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactPhase {
    Idle,
    Transmitting,
    Sent,
}

impl ContactPhase {
    /// Phase after a submit. Only an idle form accepts one.
    fn submit(self) -> Option<Self> {
        (self == Self::Idle).then_some(Self::Transmitting)
    }

    /// How long a timed phase lasts and what follows it.
    fn hold(self) -> Option<(Duration, Self)> {
        match self {
            Self::Idle => None,
            Self::Transmitting => Some((TRANSMIT_HOLD, Self::Sent)),
            Self::Sent => Some((SENT_HOLD, Self::Idle)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ContactDraft {
    agent_id: String,
    frequency: String,
    payload: String,
}

fn signal_bar_style(duration_s: f64, delay_s: f64, transmitting: bool) -> String {
    let height = if transmitting { "100%" } else { "10%" };
    format!(
        "animation-duration: {duration_s:.2}s; animation-delay: {delay_s:.2}s; height: {height};"
    )
}

#[component]
/// Contact form with a simulated transmit cycle.
pub fn ContactApp() -> impl IntoView {
    let phase = create_rw_signal(ContactPhase::Idle);
    let draft = create_rw_signal(ContactDraft::default());
    let timer = store_value(None::<TimeoutHandle>);
    let bars: Vec<(f64, f64)> = (0..SIGNAL_BARS)
        .map(|_| (crate::random_unit() * 0.5 + 0.2, crate::random_unit() * 0.5))
        .collect();

    let clear_timer = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
            timer.set_value(None);
        }
    };
    on_cleanup(clear_timer);

    create_effect(move |_| {
        let current = phase.get();
        clear_timer();
        let Some((hold, next)) = current.hold() else {
            return;
        };
        let advance = move || {
            if next == ContactPhase::Sent {
                draft.set(ContactDraft::default());
            }
            phase.set(next);
        };
        match set_timeout_with_handle(advance, hold) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("transmit timer unavailable: {err:?}");
                advance();
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(next) = phase.get_untracked().submit() {
            phase.set(next);
        }
    };
    let transmitting = move || phase.get() == ContactPhase::Transmitting;

    let form = move || {
        let bars = bars.clone();
        view! {
            <form data-ui-slot="contact-form" on:submit=on_submit>
                <label>
                    <span>"AGENT_ID (Name)"</span>
                    <input
                        type="text"
                        required
                        placeholder="IDENTIFY YOURSELF"
                        disabled=transmitting
                        prop:value=move || draft.with(|draft| draft.agent_id.clone())
                        on:input=move |ev| {
                            draft.update(|draft| draft.agent_id = event_target_value(&ev))
                        }
                    />
                </label>
                <label>
                    <span>"FREQUENCY (Email)"</span>
                    <input
                        type="email"
                        required
                        placeholder="SECURE RETURN CHANNEL"
                        disabled=transmitting
                        prop:value=move || draft.with(|draft| draft.frequency.clone())
                        on:input=move |ev| {
                            draft.update(|draft| draft.frequency = event_target_value(&ev))
                        }
                    />
                </label>
                <label data-ui-slot="payload">
                    <span>"PAYLOAD (Message)"</span>
                    <textarea
                        required
                        placeholder="ENTER ENCRYPTED MESSAGE..."
                        disabled=transmitting
                        prop:value=move || draft.with(|draft| draft.payload.clone())
                        on:input=move |ev| {
                            draft.update(|draft| draft.payload = event_target_value(&ev))
                        }
                    ></textarea>
                </label>
                <div data-ui-slot="signal" aria-hidden="true">
                    {bars
                        .into_iter()
                        .map(|(duration, delay)| {
                            view! {
                                <div
                                    data-ui-slot="signal-bar"
                                    style=move || signal_bar_style(duration, delay, transmitting())
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
                <button type="submit" disabled=transmitting>
                    {move || {
                        if transmitting() {
                            view! {
                                <span>
                                    <Icon icon=IconName::Radio size=IconSize::Sm />
                                    "ENCRYPTING & SENDING..."
                                </span>
                            }
                        } else {
                            view! {
                                <span>
                                    "TRANSMIT PAYLOAD "
                                    <Icon icon=IconName::Send size=IconSize::Sm />
                                </span>
                            }
                        }
                    }}
                </button>
            </form>
        }
    };

    let sent_notice = || {
        view! {
            <div data-ui-slot="sent" role="status">
                <Icon icon=IconName::CheckCircle size=IconSize::Lg />
                <h3>"TRANSMISSION SUCCESSFUL"</h3>
                <p>"PAYLOAD DELIVERED TO HQ."</p>
                <p>"TRACE REMOVED."</p>
            </div>
        }
    };

    view! {
        <div class="dossier-contact" data-app-view="contact">
            <header data-ui-slot="heading">
                <div>
                    <h2>"ENCRYPTED_CHANNEL"</h2>
                    <p>"SECURE TRANSMISSION NODE"</p>
                </div>
                <span data-ui-slot="radio" data-active=move || transmitting().to_string()>
                    <Icon icon=IconName::Radio size=IconSize::Md />
                </span>
            </header>
            <Show when=move || phase.get() != ContactPhase::Sent fallback=sent_notice>
                {form.clone()}
            </Show>
            <footer data-ui-slot="contact-footer">
                <span>
                    <Icon icon=IconName::Warning size=IconSize::Xs />
                    "UNSECURE LINES MONITORED"
                </span>
                <span>"SIGNAL: STRONG"</span>
            </footer>
        </div>
    }
}
