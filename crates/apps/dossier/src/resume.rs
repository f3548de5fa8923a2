use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::data::RESUME_TEXT;

const PASSCODE: &str = "1337";
const SCAN_TICK: Duration = Duration::from_millis(30);
const SCAN_STEP: f64 = 1.5;
const SCAN_COMPLETE: f64 = 100.0;
const ERROR_FLASH: Duration = Duration::from_millis(800);
const TYPE_TICK: Duration = Duration::from_millis(5);
const HEX_LEN: usize = 8;
const RING_DASH: f64 = 300.0;
const RESUME_FILE_NAME: &str = "agent_resume.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Biometric,
    Passcode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanTick {
    Progress(f64),
    Complete,
}

/// One scanner tick. The lock opens on the tick after progress reaches 100.
fn advance_scan(progress: f64) -> ScanTick {
    if progress >= SCAN_COMPLETE {
        ScanTick::Complete
    } else {
        ScanTick::Progress(progress + SCAN_STEP)
    }
}

fn check_passcode(pin: &str) -> bool {
    pin == PASSCODE
}

/// Uppercase hex flicker shown under the scanner.
fn scan_hex(mut sample: impl FnMut() -> f64) -> String {
    (0..HEX_LEN)
        .map(|_| {
            let digit = (sample().clamp(0.0, 0.999) * 16.0) as u32;
            char::from_digit(digit, 16).map_or('0', |ch| ch.to_ascii_uppercase())
        })
        .collect()
}

/// First `shown` characters of `text`.
fn typed_prefix(text: &str, shown: usize) -> &str {
    text.char_indices()
        .nth(shown)
        .map_or(text, |(end, _)| &text[..end])
}

fn ring_offset(progress: f64) -> f64 {
    RING_DASH - RING_DASH * progress.min(SCAN_COMPLETE) / SCAN_COMPLETE
}

fn resume_download_href() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let encoded: String = js_sys::encode_uri_component(RESUME_TEXT).into();
        format!("data:text/plain;charset=utf-8,{encoded}")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "#".to_string()
    }
}

#[component]
fn BiometricScanner(on_unlock: Callback<()>) -> impl IntoView {
    let progress = create_rw_signal(0.0_f64);
    let scanning = create_rw_signal(false);
    let hex = create_rw_signal(String::new());
    let timer = store_value(None::<IntervalHandle>);

    let stop_timer = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
            timer.set_value(None);
        }
    };
    on_cleanup(stop_timer);

    let start_scan = move || {
        if scanning.get_untracked() {
            return;
        }
        scanning.set(true);
        let tick = move || match advance_scan(progress.get_untracked()) {
            ScanTick::Progress(next) => {
                progress.set(next);
                hex.set(scan_hex(crate::random_unit));
            }
            ScanTick::Complete => {
                stop_timer();
                on_unlock.call(());
            }
        };
        match set_interval_with_handle(tick, SCAN_TICK) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("scanner timer unavailable: {err:?}");
                scanning.set(false);
            }
        }
    };
    let cancel_scan = move || {
        if progress.get_untracked() < SCAN_COMPLETE {
            stop_timer();
            scanning.set(false);
            progress.set(0.0);
            hex.set(String::new());
        }
    };

    view! {
        <div data-ui-slot="biometric">
            <div data-ui-slot="scanner" data-scanning=move || scanning.get().to_string()>
                <button
                    type="button"
                    aria-label="Hold to scan"
                    on:pointerdown=move |_| start_scan()
                    on:pointerup=move |_| cancel_scan()
                    on:pointerleave=move |_| cancel_scan()
                    on:pointercancel=move |_| cancel_scan()
                >
                    <Icon icon=IconName::Fingerprint size=IconSize::Lg />
                </button>
                <Show when=move || scanning.get() fallback=|| ()>
                    <svg data-ui-slot="scan-ring" aria-hidden="true">
                        <circle
                            cx="50%"
                            cy="50%"
                            r="48%"
                            fill="none"
                            stroke-dasharray=RING_DASH.to_string()
                            stroke-dashoffset=move || ring_offset(progress.get()).to_string()
                        ></circle>
                    </svg>
                </Show>
            </div>
            <div data-ui-slot="scan-status">
                <Show
                    when=move || scanning.get()
                    fallback=|| view! { <span>"HOLD TO SCAN"</span> }
                >
                    <span>{move || format!("SCANNING... {}%", progress.get().floor())}</span>
                    <span data-ui-slot="scan-hex">{move || hex.get()}</span>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PasscodeForm(on_unlock: Callback<()>) -> impl IntoView {
    let pin = create_rw_signal(String::new());
    let error = create_rw_signal(false);
    let flash = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = flash.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if check_passcode(&pin.get_untracked()) {
            on_unlock.call(());
            return;
        }
        pin.set(String::new());
        error.set(true);
        if let Some(handle) = flash.get_value() {
            handle.clear();
        }
        match set_timeout_with_handle(move || error.set(false), ERROR_FLASH) {
            Ok(handle) => flash.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("passcode flash timer unavailable: {err:?}");
                error.set(false);
            }
        }
    };

    view! {
        <form data-ui-slot="passcode" on:submit=on_submit>
            <div data-ui-slot="pin-field" data-error=move || error.get().to_string()>
                <input
                    type="password"
                    maxlength="4"
                    placeholder="____"
                    aria-label="Passcode"
                    prop:value=move || pin.get()
                    on:input=move |ev| pin.set(event_target_value(&ev))
                />
                <Show when=move || error.get() fallback=|| ()>
                    <div data-ui-slot="pin-error">
                        <Icon icon=IconName::Warning size=IconSize::Xs />
                        <span>"INVALID CODE"</span>
                    </div>
                </Show>
            </div>
            <button type="submit">"Authenticate"</button>
            <div data-ui-slot="hint">"HINT: LEET SPEAK"</div>
        </form>
    }
}

#[component]
fn LockScreen(on_unlock: Callback<()>) -> impl IntoView {
    let mode = create_rw_signal(AuthMode::Biometric);
    let mode_button = move |target: AuthMode, icon: IconName, label: &'static str| {
        view! {
            <button
                type="button"
                aria-pressed=move || (mode.get() == target).to_string()
                on:click=move |_| mode.set(target)
            >
                <Icon icon=icon size=IconSize::Xs />
                {label}
            </button>
        }
    };

    view! {
        <div data-ui-slot="lock">
            <header data-ui-slot="lock-header">
                <span data-ui-slot="locked">
                    <Icon icon=IconName::Lock size=IconSize::Xs />
                    "LOCKED // ENCRYPTED"
                </span>
                <span>"AUTH_REQUIRED"</span>
            </header>
            <div data-ui-slot="lock-body">
                <div data-ui-slot="auth-modes">
                    {mode_button(AuthMode::Biometric, IconName::Fingerprint, "BIOMETRIC")}
                    {mode_button(AuthMode::Passcode, IconName::Keypad, "PASSCODE")}
                </div>
                {move || match mode.get() {
                    AuthMode::Biometric => {
                        view! { <BiometricScanner on_unlock=on_unlock /> }.into_view()
                    }
                    AuthMode::Passcode => view! { <PasscodeForm on_unlock=on_unlock /> }.into_view(),
                }}
            </div>
            <footer data-ui-slot="lock-footer">
                <span>"SECURE_ID: 994-A"</span>
                <span>"ENCRYPTION: AES-256"</span>
            </footer>
        </div>
    }
}

#[component]
fn DecryptedResume() -> impl IntoView {
    let total = RESUME_TEXT.chars().count();
    let shown = create_rw_signal(0_usize);
    let viewer = create_node_ref::<html::Div>();
    let timer = store_value(None::<IntervalHandle>);
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let tick = move || {
        if shown.get_untracked() >= total {
            if let Some(handle) = timer.get_value() {
                handle.clear();
                timer.set_value(None);
            }
            return;
        }
        shown.update(|shown| *shown += 1);
    };
    match set_interval_with_handle(tick, TYPE_TICK) {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("typing timer unavailable: {err:?}");
            shown.set(total);
        }
    }

    create_effect(move |_| {
        shown.get();
        if let Some(viewer) = viewer.get() {
            viewer.set_scroll_top(viewer.scroll_height());
        }
    });

    view! {
        <div data-ui-slot="unlocked">
            <header data-ui-slot="unlocked-header">
                <span>
                    <Icon icon=IconName::Unlock size=IconSize::Xs />
                    "FILE DECRYPTED"
                </span>
                <a
                    data-ui-slot="download"
                    href=resume_download_href()
                    download=RESUME_FILE_NAME
                >
                    <Icon icon=IconName::Download size=IconSize::Xs />
                    "DOWNLOAD"
                </a>
            </header>
            <div data-ui-slot="resume-viewer" node_ref=viewer>
                <pre>
                    {move || typed_prefix(RESUME_TEXT, shown.get())}
                    <span data-ui-slot="cursor"></span>
                </pre>
            </div>
            <footer data-ui-slot="unlocked-footer">
                <span>"SOURCE: AGENT_RESUME.txt"</span>
                <span>"INTEGRITY: 100%"</span>
            </footer>
        </div>
    }
}

#[component]
/// Resume viewer behind a biometric or passcode lock.
pub fn ResumeLockApp() -> impl IntoView {
    let unlocked = create_rw_signal(false);
    let on_unlock = Callback::new(move |()| {
        logging::log!("resume unlocked");
        unlocked.set(true);
    });

    view! {
        <div class="dossier-resume" data-app-view="resume">
            <Show
                when=move || unlocked.get()
                fallback=move || view! { <LockScreen on_unlock=on_unlock /> }
            >
                <DecryptedResume />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scan_unlocks_one_tick_after_reaching_full() {
        let mut progress = 0.0;
        let mut ticks = 0;
        loop {
            ticks += 1;
            match advance_scan(progress) {
                ScanTick::Progress(next) => progress = next,
                ScanTick::Complete => break,
            }
        }
        // 67 steps of 1.5 pass 100, the next tick opens the lock
        assert_eq!(ticks, 68);
        assert!(progress >= SCAN_COMPLETE);
    }

    #[test]
    fn passcode_is_exact_match() {
        assert!(check_passcode("1337"));
        assert!(!check_passcode("1338"));
        assert!(!check_passcode(" 1337"));
        assert!(!check_passcode(""));
    }

    #[test]
    fn scan_hex_is_uppercase_hex() {
        assert_eq!(scan_hex(|| 0.0), "00000000");
        assert_eq!(scan_hex(|| 0.99), "FFFFFFFF");
    }

    #[test]
    fn typed_prefix_counts_chars() {
        assert_eq!(typed_prefix("AGENT", 0), "");
        assert_eq!(typed_prefix("AGENT", 3), "AGE");
        assert_eq!(typed_prefix("AGENT", 99), "AGENT");
        assert_eq!(typed_prefix("é//x", 2), "é/");
    }

    #[test]
    fn ring_offset_shrinks_with_progress() {
        assert_eq!(ring_offset(0.0), RING_DASH);
        assert_eq!(ring_offset(50.0), 150.0);
        assert_eq!(ring_offset(120.0), 0.0);
    }
}
