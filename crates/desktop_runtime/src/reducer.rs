//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::borrow::Cow;

use thiserror::Error;

use crate::{
    drag,
    model::{AppId, DesktopState, DragKind, InteractionState, PointerPosition, ViewportSize},
    reflow,
    window_manager::{self, TaskbarToggle},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or restore) an app window and focus it.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close an app window, keeping its geometry for the next open.
    CloseApp {
        /// App to close.
        app_id: AppId,
    },
    /// Minimize an app window.
    MinimizeApp {
        /// App to minimize.
        app_id: AppId,
    },
    /// Focus (and raise) an app window.
    FocusApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Taskbar button press: minimize the active window, otherwise open and focus it.
    ToggleTaskbarApp {
        /// App associated with the taskbar button.
        app_id: AppId,
    },
    /// Begin moving or resizing a window.
    BeginDrag {
        /// Window being dragged.
        app_id: AppId,
        /// Whether the gesture moves or resizes.
        kind: DragKind,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
    },
    /// Update the in-progress gesture.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the in-progress gesture.
    EndDrag,
    /// Re-fit window geometry to a resized viewport.
    ReflowViewport {
        /// New usable viewport size.
        viewport: ViewportSize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window body.
    FocusWindowBody(AppId),
    /// Report how many windows a viewport reflow adjusted.
    LogReflow {
        /// Windows whose rectangle changed.
        adjusted: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    /// A gesture targeted a window that is not open.
    #[error("window `{}` is not open", .0.token())]
    WindowNotOpen(AppId),
    /// A gesture was started while another one is still in progress.
    #[error("drag already in progress on `{}`", .0.token())]
    DragInProgress(AppId),
    /// A gesture update arrived with no gesture in progress.
    #[error("no drag in progress")]
    NoActiveDrag,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Window lifecycle actions never fail: closing a closed window or minimizing a minimized one
/// leaves state untouched. Gesture actions are stricter.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotOpen`] or [`ReducerError::DragInProgress`] when a drag cannot
/// start, and [`ReducerError::NoActiveDrag`] when a drag update arrives outside a gesture. State is
/// not modified on error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            window_manager::open_window(state, app_id);
            effects.push(RuntimeEffect::FocusWindowBody(app_id));
        }
        DesktopAction::CloseApp { app_id } => {
            window_manager::close_window(state, app_id);
        }
        DesktopAction::MinimizeApp { app_id } => {
            window_manager::minimize_window(state, app_id);
        }
        DesktopAction::FocusApp { app_id } => {
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::ToggleTaskbarApp { app_id } => {
            if window_manager::toggle_taskbar_window(state, app_id) == TaskbarToggle::Opened {
                effects.push(RuntimeEffect::FocusWindowBody(app_id));
            }
        }
        DesktopAction::BeginDrag {
            app_id,
            kind,
            pointer,
        } => {
            drag::begin_drag(state, interaction, app_id, kind, pointer)?;
        }
        DesktopAction::UpdateDrag { pointer } => {
            drag::update_drag(state, interaction, pointer)?;
        }
        DesktopAction::EndDrag => {
            drag::end_drag(interaction);
        }
        DesktopAction::ReflowViewport { viewport } => {
            let reflowed = match reflow::reflow_windows(viewport, &state.windows) {
                Cow::Borrowed(_) => None,
                Cow::Owned(windows) => Some(windows),
            };
            if let Some(windows) = reflowed {
                let adjusted = state
                    .windows
                    .iter()
                    .zip(windows.iter())
                    .filter(|((_, before), (_, after))| before.rect != after.rect)
                    .count();
                state.windows = windows;
                effects.push(RuntimeEffect::LogReflow { adjusted });
            }
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::app_registry,
        model::{WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
        reflow::initial_windows,
    };

    const DESKTOP: ViewportSize = ViewportSize {
        width: 1280,
        height: 800,
    };

    fn fresh() -> (DesktopState, InteractionState) {
        (
            DesktopState::new(initial_windows(DESKTOP, app_registry())),
            InteractionState::default(),
        )
    }

    fn apply(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce action")
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn open_emits_focus_effect_and_raises_window() {
        let (mut state, mut interaction) = fresh();

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Terminal,
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowBody(AppId::Terminal)]);
        assert_eq!(state.active, Some(AppId::Terminal));
        assert_eq!(state.window_stack(), vec![AppId::Terminal]);
    }

    #[test]
    fn open_two_then_focus_first_brings_it_to_front() {
        let (mut state, mut interaction) = fresh();
        for app_id in [AppId::Projects, AppId::Profile] {
            apply(&mut state, &mut interaction, DesktopAction::OpenApp { app_id });
        }

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::FocusApp {
                app_id: AppId::Projects,
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.active, Some(AppId::Projects));
        assert_eq!(state.window_stack(), vec![AppId::Profile, AppId::Projects]);
    }

    #[test]
    fn minimize_then_taskbar_restores_and_focuses() {
        let (mut state, mut interaction) = fresh();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Contact,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: AppId::Contact,
            },
        );
        assert!(state.window_stack().is_empty());
        assert_eq!(state.active, None);

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: AppId::Contact,
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowBody(AppId::Contact)]);
        assert_eq!(state.window_stack(), vec![AppId::Contact]);
        assert_eq!(state.active, Some(AppId::Contact));
    }

    #[test]
    fn taskbar_on_active_window_minimizes_without_effects() {
        let (mut state, mut interaction) = fresh();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Skills,
            },
        );

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: AppId::Skills,
            },
        );

        assert!(effects.is_empty());
        assert!(state.window(AppId::Skills).is_minimized);
    }

    #[test]
    fn close_then_reopen_restores_last_geometry() {
        let (mut state, mut interaction) = fresh();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Resume,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Resume,
                kind: DragKind::Move,
                pointer: pointer(600, 110),
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: pointer(400, 60),
            },
        );
        apply(&mut state, &mut interaction, DesktopAction::EndDrag);
        let moved = state.window(AppId::Resume).rect;

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Resume,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Resume,
            },
        );

        assert_eq!(
            moved,
            WindowRect {
                x: 350,
                y: 50,
                w: 600,
                h: 700,
            }
        );
        assert_eq!(state.window(AppId::Resume).rect, moved);
    }

    #[test]
    fn lifecycle_noops_leave_state_unchanged() {
        let (mut state, mut interaction) = fresh();
        let before = state.clone();

        for action in [
            DesktopAction::CloseApp {
                app_id: AppId::Profile,
            },
            DesktopAction::MinimizeApp {
                app_id: AppId::Profile,
            },
            DesktopAction::FocusApp {
                app_id: AppId::Profile,
            },
            DesktopAction::EndDrag,
        ] {
            assert!(apply(&mut state, &mut interaction, action).is_empty());
        }

        assert_eq!(state, before);
    }

    #[test]
    fn rejected_gestures_report_errors_without_mutation() {
        let (mut state, mut interaction) = fresh();
        let before = state.clone();

        let update = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: pointer(1, 1),
            },
        );
        let begin_closed = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Skills,
                kind: DragKind::Resize,
                pointer: pointer(1, 1),
            },
        );

        assert_eq!(update, Err(ReducerError::NoActiveDrag));
        assert_eq!(begin_closed, Err(ReducerError::WindowNotOpen(AppId::Skills)));
        assert_eq!(state, before);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn resize_gesture_respects_minimum_size() {
        let (mut state, mut interaction) = fresh();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Terminal,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Terminal,
                kind: DragKind::Resize,
                pointer: pointer(1000, 600),
            },
        );

        for (x, y) in [(900, 500), (100, 100), (-500, 40), (1200, 900)] {
            apply(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateDrag {
                    pointer: pointer(x, y),
                },
            );
            let rect = state.window(AppId::Terminal).rect;
            assert!(rect.w >= MIN_WINDOW_WIDTH);
            assert!(rect.h >= MIN_WINDOW_HEIGHT);
            assert_eq!((rect.x, rect.y), (400, 200));
        }
    }

    #[test]
    fn reflow_reports_adjusted_windows() {
        let (mut state, mut interaction) = fresh();

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::ReflowViewport {
                viewport: ViewportSize {
                    width: 1024,
                    height: 768,
                },
            },
        );

        // terminal (400 + 600) fits; resume (550 + 600) does not.
        assert_eq!(effects, vec![RuntimeEffect::LogReflow { adjusted: 1 }]);
        assert_eq!(state.window(AppId::Resume).rect.x, 414);
        assert_eq!(state.window(AppId::Terminal).rect.x, 400);
    }

    #[test]
    fn reflow_without_changes_emits_nothing() {
        let (mut state, mut interaction) = fresh();
        let before = state.clone();

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::ReflowViewport { viewport: DESKTOP },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn drag_on_window_closed_mid_gesture_is_ignored() {
        let (mut state, mut interaction) = fresh();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Profile,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Profile,
                kind: DragKind::Move,
                pointer: pointer(60, 60),
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Profile,
            },
        );
        let closed = state.clone();

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: pointer(300, 300),
            },
        );
        apply(&mut state, &mut interaction, DesktopAction::EndDrag);

        assert_eq!(state, closed);
        assert!(!interaction.is_dragging());
    }
}
