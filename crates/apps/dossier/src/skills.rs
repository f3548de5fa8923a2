use std::time::Duration;

use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::data::{SkillCategory, SKILL_MATRIX};

const MOUNT_DELAY: Duration = Duration::from_millis(100);
const BAR_STAGGER_MS: usize = 150;

/// Staggered animation delay for the bar at (`category`, `skill`).
fn bar_delay_ms(category: usize, skill: usize) -> usize {
    (category * 3 + skill) * BAR_STAGGER_MS
}

fn bar_style(level: u8, filled: bool, delay_ms: usize) -> String {
    let width = if filled { level } else { 0 };
    format!("width: {width}%; transition-delay: {delay_ms}ms;")
}

fn category_panel(
    index: usize,
    category: &'static SkillCategory,
    mounted: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <section data-ui-slot="skill-category">
            <h3>{category.name}</h3>
            <ul>
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(slot, skill)| {
                        let delay = bar_delay_ms(index, slot);
                        view! {
                            <li data-ui-slot="skill">
                                <div data-ui-slot="skill-label">
                                    <span>{skill.name}</span>
                                    <span>{format!("{}%", skill.level)}</span>
                                </div>
                                <div data-ui-slot="skill-track">
                                    <div
                                        data-ui-slot="skill-bar"
                                        style=move || bar_style(skill.level, mounted.get(), delay)
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
/// Skill matrix whose bars fill shortly after mount.
pub fn SkillsApp() -> impl IntoView {
    let (mounted, set_mounted) = create_signal(false);
    match set_timeout_with_handle(move || set_mounted.set(true), MOUNT_DELAY) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            logging::warn!("skill bar timer unavailable: {err:?}");
            set_mounted.set(true);
        }
    }

    view! {
        <div class="dossier-skills" data-app-view="skills">
            <header data-ui-slot="heading">
                <Icon icon=IconName::Cpu size=IconSize::Md />
                <h2>"SKILL_MATRIX"</h2>
            </header>
            <div data-ui-slot="skill-grid">
                {SKILL_MATRIX
                    .iter()
                    .enumerate()
                    .map(|(index, category)| category_panel(index, category, mounted))
                    .collect_view()}
            </div>
        </div>
    }
}
