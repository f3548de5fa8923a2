use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

const MAX_TRANSCRIPT_ENTRIES: usize = 100;
const REPLY_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    System,
    Agent,
    Hq,
}

impl Speaker {
    fn label(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Agent => "AGENT",
            Self::Hq => "HQ_INTEL",
        }
    }

    fn slot(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Agent => "agent",
            Self::Hq => "hq",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TranscriptEntry {
    id: u64,
    speaker: Speaker,
    text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HqReply {
    Say(&'static str),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_id: u64,
}

impl Transcript {
    fn new() -> Self {
        let mut transcript = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        transcript.push(Speaker::System, "SECURE UPLINK ESTABLISHED. CONNECTED TO HQ AI.");
        transcript.push(
            Speaker::Hq,
            "Agent, this is HQ. I am ready to assist with intelligence gathering or code \
             analysis. What is your status?",
        );
        transcript
    }

    fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            id: self.next_id,
            speaker,
            text: text.into(),
        });
        self.next_id += 1;
        if self.entries.len() > MAX_TRANSCRIPT_ENTRIES {
            let overflow = self.entries.len() - MAX_TRANSCRIPT_ENTRIES;
            self.entries.drain(0..overflow);
        }
    }

    fn apply(&mut self, reply: HqReply) {
        match reply {
            HqReply::Say(text) => self.push(Speaker::Hq, text),
            HqReply::Clear => {
                let next_id = self.next_id;
                *self = Self::new();
                // keep keys unique across clears
                for entry in &mut self.entries {
                    entry.id += next_id;
                }
                self.next_id += next_id;
            }
        }
    }
}

/// Canned HQ handler reply for an agent transmission. `None` for blank input.
fn hq_reply(input: &str) -> Option<HqReply> {
    let command = input.trim().to_ascii_lowercase();
    if command.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = command
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    let mentions = |stems: &[&str]| {
        tokens
            .iter()
            .any(|token| stems.iter().any(|stem| token.starts_with(stem)))
    };

    let reply = if command == "clear" || command == "cls" {
        HqReply::Clear
    } else if command == "?" || mentions(&["help", "command"]) {
        HqReply::Say(
            "Available channels: STATUS, MISSION, SKILLS, CONTACT, WHOAMI, CLEAR. Transmit a \
             keyword, Operative.",
        )
    } else if mentions(&["status", "sitrep", "report"]) {
        HqReply::Say("All assets nominal. Uplink integrity 100%. No hostile traffic on the wire.")
    } else if mentions(&["mission", "project", "operation"]) {
        HqReply::Say(
            "Mission files are in the MISSION_FILES archive. Classified entries require \
             decryption on site.",
        )
    } else if mentions(&["skill", "stack", "tech"]) {
        HqReply::Say("Capability matrix is stored under SKILL_MATRIX. Intel is current.")
    } else if mentions(&["contact", "hire", "email"]) {
        HqReply::Say("Use the ENCRYPTED_CHANNEL to transmit a payload. HQ answers every signal.")
    } else if mentions(&["who", "identity", "agent"]) {
        HqReply::Say("You are a field operative with full stack clearance. Identity sealed.")
    } else if mentions(&["hello", "hey"]) || tokens.contains(&"hi") {
        HqReply::Say("Signal received, Agent. Awaiting your intel.")
    } else {
        HqReply::Say("Cipher not recognized. Transmit HELP for the channel list.")
    };
    Some(reply)
}

#[component]
/// Chat-style HQ uplink with a local canned responder.
pub fn TerminalApp() -> impl IntoView {
    let transcript = create_rw_signal(Transcript::new());
    let input = create_rw_signal(String::new());
    let processing = create_rw_signal(false);
    let pending = store_value(None::<TimeoutHandle>);
    let screen = create_node_ref::<html::Div>();

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    create_effect(move |_| {
        transcript.with(|_| ());
        processing.get();
        if let Some(screen) = screen.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }
        let message = input.get_untracked();
        let Some(reply) = hq_reply(&message) else {
            return;
        };
        transcript.update(|transcript| transcript.push(Speaker::Agent, message.trim()));
        input.set(String::new());
        processing.set(true);

        let deliver = move || {
            transcript.update(|transcript| transcript.apply(reply));
            processing.set(false);
        };
        match set_timeout_with_handle(deliver, REPLY_DELAY) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("uplink timer unavailable: {err:?}");
                deliver();
            }
        }
    };

    view! {
        <div class="dossier-terminal" data-app-view="terminal">
            <div data-ui-slot="transcript" role="log" aria-live="polite" node_ref=screen>
                <For
                    each=move || transcript.with(|transcript| transcript.entries.clone())
                    key=|entry| entry.id
                    let:entry
                >
                    <div data-ui-slot="message" data-speaker=entry.speaker.slot()>
                        <span data-ui-slot="speaker">{entry.speaker.label()}</span>
                        <div data-ui-slot="text">{entry.text}</div>
                    </div>
                </For>
                <Show when=move || processing.get() fallback=|| ()>
                    <div data-ui-slot="processing">"PROCESSING INTEL..."</div>
                </Show>
            </div>
            <form data-ui-slot="prompt" on:submit=on_submit>
                <span data-ui-slot="caret">">"</span>
                <input
                    type="text"
                    aria-label="Command"
                    placeholder="Enter command..."
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button type="submit" aria-label="Transmit" disabled=move || processing.get()>
                    <Icon icon=IconName::Send size=IconSize::Sm />
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_input_gets_no_reply() {
        assert_eq!(hq_reply(""), None);
        assert_eq!(hq_reply("   \t"), None);
    }

    #[test]
    fn keywords_route_to_canned_replies() {
        assert_eq!(hq_reply("  CLEAR "), Some(HqReply::Clear));
        assert!(matches!(hq_reply("help"), Some(HqReply::Say(text)) if text.contains("STATUS")));
        assert!(matches!(
            hq_reply("Status?"),
            Some(HqReply::Say(text)) if text.contains("nominal")
        ));
        assert!(
            matches!(hq_reply("zzz"), Some(HqReply::Say(text)) if text.starts_with("Cipher"))
        );
    }

    #[test]
    fn transcript_opens_with_uplink_banner() {
        let transcript = Transcript::new();
        let speakers: Vec<Speaker> = transcript.entries.iter().map(|e| e.speaker).collect();
        assert_eq!(speakers, vec![Speaker::System, Speaker::Hq]);
    }

    #[test]
    fn transcript_drops_oldest_entries_past_cap() {
        let mut transcript = Transcript::new();
        for n in 0..MAX_TRANSCRIPT_ENTRIES {
            transcript.push(Speaker::Agent, format!("ping {n}"));
        }
        assert_eq!(transcript.entries.len(), MAX_TRANSCRIPT_ENTRIES);
        assert_eq!(transcript.entries[0].text, "ping 0");
        assert_eq!(
            transcript.entries.last().map(|e| e.text.as_str()),
            Some(format!("ping {}", MAX_TRANSCRIPT_ENTRIES - 1).as_str())
        );
    }

    #[test]
    fn clear_resets_banner_with_fresh_keys() {
        let mut transcript = Transcript::new();
        transcript.push(Speaker::Agent, "hello");
        let before: Vec<u64> = transcript.entries.iter().map(|e| e.id).collect();

        transcript.apply(HqReply::Clear);

        assert_eq!(transcript.entries.len(), 2);
        assert!(transcript.entries.iter().all(|e| !before.contains(&e.id)));
        assert!(transcript.next_id > *before.iter().max().unwrap_or(&0));
    }
}
