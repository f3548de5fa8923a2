//! Desktop shell UI composition and interaction surfaces.

mod boot;
mod system_monitor;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconSize,
};

pub use self::boot::BootSequence;
use self::{system_monitor::SystemMonitor, taskbar::DesktopTaskbar, window::DesktopWindow};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

use crate::{
    apps,
    model::{AppId, DesktopState, PointerPosition, LARGE_BREAKPOINT, TASKBAR_HEIGHT_PX},
    reducer::DesktopAction,
    window_manager::Z_INDEX_CEILING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    fn date_label(self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

/// Uniform sample in `[0, 1)`; native builds use the midpoint.
fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

/// Visible windows in app order. Paint order comes from each frame's `z-index`, so the DOM order
/// stays stable while windows are raised.
fn visible_windows(state: &DesktopState) -> Vec<AppId> {
    state
        .windows
        .iter()
        .filter(|(_, window)| window.is_visible())
        .map(|(app_id, _)| app_id)
        .collect()
}

#[component]
/// Renders the full desktop shell UI: icons, window stack, system monitor, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let viewport = create_rw_signal(runtime.host.get_value().viewport());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let next = runtime.host.get_value().viewport();
        viewport.set(next);
        runtime.dispatch_action(DesktopAction::ReflowViewport { viewport: next });
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().is_dragging() {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            style=shell_style()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-dragging=move || runtime.interaction.get().is_dragging().to_string()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_end
        >
            <DesktopBackdrop>
                <div data-ui-slot="grid" aria-hidden="true"></div>
                <Show when=move || shows_system_monitor(viewport.get().width) fallback=|| ()>
                    <SystemMonitor />
                </Show>
                <DesktopIconGrid>
                    {apps::app_registry()
                        .iter()
                        .map(|app| {
                            let app_id = app.app_id;
                            view! {
                                <DesktopIconButton
                                    title=app.title
                                    data_app=app_id.token()
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenApp { app_id });
                                    })
                                >
                                    <span data-ui-slot="glyph">
                                        <Icon icon=app.icon size=IconSize::Lg />
                                    </span>
                                    <span data-ui-slot="label">{app.title}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.with(visible_windows)
                        key=|app_id| *app_id
                        let:app_id
                    >
                        <DesktopWindow app_id=app_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar />
        </div>
    }
}

/// CSS custom properties consumed by the stylesheet: taskbar height, and a taskbar stacking
/// level above any window z-index.
fn shell_style() -> String {
    format!(
        "--taskbar-height: {TASKBAR_HEIGHT_PX}px; --taskbar-z: {};",
        Z_INDEX_CEILING + 1
    )
}

fn shows_system_monitor(viewport_width: i32) -> bool {
    viewport_width >= LARGE_BREAKPOINT
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().is_dragging() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowMap, WindowState};

    #[test]
    fn visible_windows_keep_app_order_regardless_of_z() {
        let mut windows = WindowMap::default();
        for (app_id, z_index) in [(AppId::Contact, 2), (AppId::Profile, 9), (AppId::Skills, 4)] {
            *windows.get_mut(app_id) = WindowState {
                is_open: true,
                z_index,
                ..WindowState::default()
            };
        }
        windows.get_mut(AppId::Skills).is_minimized = true;

        assert_eq!(
            visible_windows(&DesktopState::new(windows)),
            vec![AppId::Profile, AppId::Contact]
        );
    }

    #[test]
    fn taskbar_stacks_above_window_ceiling() {
        assert_eq!(shell_style(), "--taskbar-height: 48px; --taskbar-z: 10001;");
    }

    #[test]
    fn system_monitor_needs_a_large_viewport() {
        assert!(!shows_system_monitor(LARGE_BREAKPOINT - 1));
        assert!(shows_system_monitor(LARGE_BREAKPOINT));
        assert!(shows_system_monitor(1440));
    }

    #[test]
    fn native_clock_is_epoch() {
        let now = ClockSnapshot::now();
        assert_eq!(now.date_label(), "1/1/1970");
        assert_eq!(now.time_label(), "00:00:00");
    }

    #[test]
    fn native_random_is_midpoint() {
        assert_eq!(random_unit(), 0.5);
    }
}
