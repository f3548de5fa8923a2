//! Boot log shown before the desktop mounts.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;

const BOOT_LOG: [&str; 8] = [
    "Initializing BIOS...",
    "Checking memory integrity... OK",
    "Loading SpyOS Kernel v3.7...",
    "Mounting file systems...",
    "Decrypting user keys...",
    "Establishing secure connection to HQ...",
    "Bypassing firewalls...",
    "Access Granted.",
];

/// Pause after the last line before handing over to the desktop.
const BOOT_SETTLE: Duration = Duration::from_millis(1_000);
const LINE_DELAY_MIN_MS: f64 = 100.0;
const LINE_DELAY_SPREAD_MS: f64 = 400.0;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BootLine {
    stamp: String,
    text: &'static str,
}

/// Delay before the next log line for a uniform `sample` in `[0, 1)`.
fn line_delay(sample: f64) -> Duration {
    let millis = LINE_DELAY_MIN_MS + sample.clamp(0.0, 1.0) * LINE_DELAY_SPREAD_MS;
    Duration::from_millis(millis as u64)
}

/// Next log line once `shown` lines are on screen; `None` once the log is complete.
fn next_step(shown: usize) -> Option<&'static str> {
    BOOT_LOG.get(shown).copied()
}

#[component]
/// Prints the boot log one line at a time, then calls `on_complete` once.
pub fn BootSequence(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let lines = create_rw_signal(Vec::<BootLine>::new());
    let pending = store_value(None::<TimeoutHandle>);

    create_effect(move |_| {
        let shown = lines.with(Vec::len);
        let (delay, step) = match next_step(shown) {
            Some(text) => (line_delay(random_unit()), Some(text)),
            None => (BOOT_SETTLE, None),
        };

        let scheduled = set_timeout_with_handle(
            move || match step {
                Some(text) => lines.update(|lines| {
                    lines.push(BootLine {
                        stamp: ClockSnapshot::now().time_label(),
                        text,
                    })
                }),
                None => on_complete.call(()),
            },
            delay,
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("boot timer unavailable, skipping boot log: {err:?}");
                on_complete.call(());
            }
        }
    });
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <div class="boot-sequence" role="log" aria-live="polite" data-ui-kind="boot-sequence">
            <For
                each=move || lines.get().into_iter().enumerate()
                key=|(index, _)| *index
                let:entry
            >
                {{
                    let (_, line) = entry;
                    view! {
                        <div data-ui-slot="line">
                            <span data-ui-slot="stamp">"[" {line.stamp} "]"</span>
                            {line.text}
                        </div>
                    }
                }}
            </For>
            <div data-ui-slot="cursor" aria-hidden="true">"_"</div>
        </div>
    }
}
