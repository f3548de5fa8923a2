//! Window lifecycle and stacking transitions used by the desktop reducer.
//!
//! Each helper mutates a working copy of [`DesktopState`] owned by the reducer; the runtime swaps
//! the whole snapshot into its signal afterwards, so readers never observe a half-applied
//! transition.

use leptos::logging;

use crate::model::{AppId, DesktopState};

/// Once the stack counter reaches this value it is compacted back to `1..=APP_COUNT`.
pub const Z_INDEX_CEILING: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a taskbar button press.
pub enum TaskbarToggle {
    /// The window was open and active, so it was minimized.
    Minimized,
    /// The window was opened, restored, or raised.
    Opened,
}

/// Opens `app_id` (restoring it if minimized) and focuses it. Reopening keeps the last geometry.
pub fn open_window(state: &mut DesktopState, app_id: AppId) {
    let window = state.windows.get_mut(app_id);
    window.is_open = true;
    window.is_minimized = false;
    focus_window(state, app_id);
}

/// Closes `app_id` without touching its geometry or z-index.
///
/// Returns `false` when the window was already closed.
pub fn close_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let window = state.windows.get_mut(app_id);
    if !window.is_open {
        return false;
    }
    window.is_open = false;
    if state.active == Some(app_id) {
        state.active = None;
    }
    true
}

/// Hides `app_id` from the window stack while keeping it open in the taskbar.
///
/// Returns `false` when the window is closed or already minimized.
pub fn minimize_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let window = state.windows.get_mut(app_id);
    if !window.is_open || window.is_minimized {
        return false;
    }
    window.is_minimized = true;
    if state.active == Some(app_id) {
        state.active = None;
    }
    true
}

/// Raises `app_id` above every other window, un-minimizes it, and makes it active.
///
/// Returns `false` (leaving state untouched) when the window is closed, or when it is already
/// the active, visible, strictly-topmost window.
pub fn focus_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let window = *state.window(app_id);
    if !window.is_open {
        return false;
    }

    let strictly_on_top = state
        .windows
        .iter()
        .filter(|(other, _)| *other != app_id)
        .all(|(_, other)| other.z_index < window.z_index);
    if state.is_active(app_id) && !window.is_minimized && strictly_on_top {
        return false;
    }

    if state.windows.max_z() >= Z_INDEX_CEILING {
        normalize_window_stack(state);
    }
    let next_z = state.windows.max_z().saturating_add(1);

    let window = state.windows.get_mut(app_id);
    window.z_index = next_z;
    window.is_minimized = false;
    state.active = Some(app_id);
    true
}

/// Taskbar semantics: an open, active window minimizes; anything else opens and focuses.
pub fn toggle_taskbar_window(state: &mut DesktopState, app_id: AppId) -> TaskbarToggle {
    if state.window(app_id).is_open && state.is_active(app_id) {
        minimize_window(state, app_id);
        TaskbarToggle::Minimized
    } else {
        open_window(state, app_id);
        TaskbarToggle::Opened
    }
}

/// Compacts z-indices to `1..=APP_COUNT`, preserving relative order (ties keep app order).
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut order: Vec<(u32, AppId)> = state
        .windows
        .iter()
        .map(|(app_id, window)| (window.z_index, app_id))
        .collect();
    order.sort();

    for (rank, (_, app_id)) in order.into_iter().enumerate() {
        state.windows.get_mut(app_id).z_index = rank as u32 + 1;
    }
    logging::log!("window stack renormalized");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowMap, WindowRect, WindowState};

    fn desktop() -> DesktopState {
        let mut windows = WindowMap::default();
        for (index, (_, window)) in windows.iter_mut().enumerate() {
            *window = WindowState::closed_at(WindowRect {
                x: 40 * index as i32,
                y: 30,
                w: 600,
                h: 400,
            });
        }
        DesktopState::new(windows)
    }

    fn relative_order(state: &DesktopState, ids: &[AppId]) -> Vec<AppId> {
        let mut sorted = ids.to_vec();
        sorted.sort_by_key(|id| state.window(*id).z_index);
        sorted
    }

    #[test]
    fn open_sets_open_clears_minimized_and_focuses() {
        let mut state = desktop();
        state.windows.get_mut(AppId::Skills).is_minimized = true;

        open_window(&mut state, AppId::Skills);

        let window = state.window(AppId::Skills);
        assert!(window.is_open);
        assert!(!window.is_minimized);
        assert_eq!(state.active, Some(AppId::Skills));
        assert_eq!(window.z_index, 2);
    }

    #[test]
    fn opening_an_open_window_refocuses_it() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Terminal);

        open_window(&mut state, AppId::Profile);

        assert_eq!(state.active, Some(AppId::Profile));
        assert!(state.window(AppId::Profile).z_index > state.window(AppId::Terminal).z_index);
    }

    #[test]
    fn close_keeps_geometry_and_stack_and_clears_active() {
        let mut state = desktop();
        open_window(&mut state, AppId::Contact);
        let before = *state.window(AppId::Contact);

        assert!(close_window(&mut state, AppId::Contact));

        let after = state.window(AppId::Contact);
        assert!(!after.is_open);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(state.active, None);
        assert!(!close_window(&mut state, AppId::Contact));
    }

    #[test]
    fn close_of_inactive_window_keeps_active_window() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Resume);

        close_window(&mut state, AppId::Profile);

        assert_eq!(state.active, Some(AppId::Resume));
    }

    #[test]
    fn geometry_survives_close_reopen_cycle() {
        let mut state = desktop();
        open_window(&mut state, AppId::Projects);
        state.windows.get_mut(AppId::Projects).rect = WindowRect {
            x: 321,
            y: 123,
            w: 777,
            h: 555,
        };

        close_window(&mut state, AppId::Projects);
        open_window(&mut state, AppId::Projects);

        assert_eq!(
            state.window(AppId::Projects).rect,
            WindowRect {
                x: 321,
                y: 123,
                w: 777,
                h: 555,
            }
        );
    }

    #[test]
    fn minimize_hides_window_but_keeps_it_open() {
        let mut state = desktop();
        open_window(&mut state, AppId::Terminal);

        assert!(minimize_window(&mut state, AppId::Terminal));

        let window = state.window(AppId::Terminal);
        assert!(window.is_open);
        assert!(window.is_minimized);
        assert_eq!(state.active, None);
        assert!(state.window_stack().is_empty());
    }

    #[test]
    fn minimizing_a_closed_window_is_a_noop() {
        let mut state = desktop();
        let before = state.clone();
        assert!(!minimize_window(&mut state, AppId::Skills));
        assert_eq!(state, before);
    }

    #[test]
    fn focus_on_closed_window_is_a_noop() {
        let mut state = desktop();
        let before = state.clone();
        assert!(!focus_window(&mut state, AppId::Resume));
        assert_eq!(state, before);
    }

    #[test]
    fn focus_makes_window_strictly_topmost() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Projects);
        open_window(&mut state, AppId::Skills);

        focus_window(&mut state, AppId::Profile);

        let top = state.window(AppId::Profile).z_index;
        for (app_id, window) in state.windows.iter() {
            if app_id != AppId::Profile {
                assert!(window.z_index < top);
            }
        }
        assert_eq!(state.active, Some(AppId::Profile));
    }

    #[test]
    fn repeated_focus_keeps_window_on_top_and_others_in_order() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Projects);
        open_window(&mut state, AppId::Skills);
        let others = [AppId::Profile, AppId::Projects];
        let order_before = relative_order(&state, &others);

        focus_window(&mut state, AppId::Skills);
        let after_first = state.clone();
        focus_window(&mut state, AppId::Skills);

        assert_eq!(state, after_first);
        assert_eq!(state.window_stack().last(), Some(&AppId::Skills));
        assert_eq!(relative_order(&state, &others), order_before);
    }

    #[test]
    fn stack_order_matches_focus_recency() {
        let mut state = desktop();
        for app_id in AppId::ALL {
            open_window(&mut state, app_id);
        }
        let sequence = [
            AppId::Terminal,
            AppId::Profile,
            AppId::Contact,
            AppId::Terminal,
            AppId::Skills,
            AppId::Resume,
            AppId::Projects,
            AppId::Profile,
        ];
        for app_id in sequence {
            focus_window(&mut state, app_id);
        }

        assert_eq!(
            state.window_stack(),
            vec![
                AppId::Contact,
                AppId::Terminal,
                AppId::Skills,
                AppId::Resume,
                AppId::Projects,
                AppId::Profile,
            ]
        );
    }

    #[test]
    fn refocusing_earlier_window_puts_it_above_later_one() {
        let mut state = desktop();
        open_window(&mut state, AppId::Projects);
        open_window(&mut state, AppId::Profile);

        focus_window(&mut state, AppId::Projects);

        assert!(state.window(AppId::Projects).z_index > state.window(AppId::Profile).z_index);
        assert_eq!(state.window_stack(), vec![AppId::Profile, AppId::Projects]);
    }

    #[test]
    fn focus_restores_minimized_window() {
        let mut state = desktop();
        open_window(&mut state, AppId::Contact);
        minimize_window(&mut state, AppId::Contact);

        assert!(focus_window(&mut state, AppId::Contact));

        assert!(!state.window(AppId::Contact).is_minimized);
        assert_eq!(state.active, Some(AppId::Contact));
    }

    #[test]
    fn taskbar_toggle_minimizes_active_window_and_restores_it() {
        let mut state = desktop();
        open_window(&mut state, AppId::Resume);

        assert_eq!(
            toggle_taskbar_window(&mut state, AppId::Resume),
            TaskbarToggle::Minimized
        );
        assert!(state.window(AppId::Resume).is_minimized);

        assert_eq!(
            toggle_taskbar_window(&mut state, AppId::Resume),
            TaskbarToggle::Opened
        );
        assert!(!state.window(AppId::Resume).is_minimized);
        assert_eq!(state.active, Some(AppId::Resume));
    }

    #[test]
    fn taskbar_toggle_raises_open_inactive_window() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Skills);

        assert_eq!(
            toggle_taskbar_window(&mut state, AppId::Profile),
            TaskbarToggle::Opened
        );
        assert_eq!(state.active, Some(AppId::Profile));
        assert_eq!(state.window_stack().last(), Some(&AppId::Profile));
    }

    #[test]
    fn focus_renormalizes_stack_at_ceiling() {
        let mut state = desktop();
        open_window(&mut state, AppId::Profile);
        open_window(&mut state, AppId::Skills);
        state.windows.get_mut(AppId::Profile).z_index = Z_INDEX_CEILING - 5;
        state.windows.get_mut(AppId::Skills).z_index = Z_INDEX_CEILING;

        focus_window(&mut state, AppId::Profile);

        assert!(state.windows.max_z() <= crate::model::APP_COUNT as u32 + 1);
        assert_eq!(state.window_stack(), vec![AppId::Skills, AppId::Profile]);
    }

    #[test]
    fn normalize_preserves_relative_order() {
        let mut state = desktop();
        let z_values = [900, 3, 450, 3, 12, 7000];
        for ((_, window), z) in state.windows.iter_mut().zip(z_values) {
            window.z_index = z;
        }

        normalize_window_stack(&mut state);

        let ranks: Vec<u32> = state.windows.iter().map(|(_, w)| w.z_index).collect();
        assert_eq!(ranks, vec![5, 1, 4, 2, 3, 6]);
    }
}
