use super::*;
use crate::apps::AppDescriptor;
use system_ui::{Taskbar, TaskbarButton, TaskbarSection};

/// Brand label shown at the start of the taskbar.
const TASKBAR_BRAND: &str = "SpyOS";

/// Open windows (minimized included) in catalog order.
fn taskbar_entries(state: &DesktopState) -> Vec<&'static AppDescriptor> {
    apps::app_registry()
        .iter()
        .filter(|app| state.window(app.app_id).is_open)
        .collect()
}

fn taskbar_aria_label(app: &AppDescriptor, state: &DesktopState) -> String {
    let window = state.window(app.app_id);
    let status = if window.is_minimized {
        "minimized"
    } else if state.is_active(app.app_id) {
        "active"
    } else {
        "open"
    };
    format!("{} ({status})", app.title)
}

fn connection_label(clock: ClockSnapshot) -> String {
    format!("SECURE CONNECTION // {}", clock.date_label())
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let connection = connection_label(ClockSnapshot::now());

    view! {
        <Taskbar aria_label="Desktop taskbar">
            <TaskbarSection ui_slot="brand">
                <span data-ui-slot="brand-label">{TASKBAR_BRAND}</span>
            </TaskbarSection>
            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || state.with(taskbar_entries)
                    key=|app| app.app_id
                    let:app
                >
                    {{
                        let app_id = app.app_id;
                        view! {
                            <TaskbarButton
                                id=format!("taskbar-{}", app_id.token())
                                aria_label=Signal::derive(move || {
                                    state.with(|desktop| taskbar_aria_label(app, desktop))
                                })
                                data_app=app_id.token()
                                pressed=Signal::derive(move || {
                                    state.with(|desktop| desktop.is_active(app_id))
                                })
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarApp {
                                        app_id,
                                    });
                                })
                            >
                                <Icon icon=app.icon size=IconSize::Sm />
                                <span data-ui-slot="label">{app.title}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="status">
                <span data-ui-slot="connection">{connection}</span>
            </TaskbarSection>
        </Taskbar>
    }
}
