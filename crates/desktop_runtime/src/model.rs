use serde::{Deserialize, Serialize};

/// Number of launchable applications.
pub const APP_COUNT: usize = 6;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Viewports narrower than this use the mobile placement policy.
pub const MOBILE_BREAKPOINT: i32 = 768;
/// Viewports at least this wide show the system monitor widget.
pub const LARGE_BREAKPOINT: i32 = 1024;
/// Height of the taskbar strip at the bottom of the desktop.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Profile,
    Projects,
    Skills,
    Terminal,
    Resume,
    Contact,
}

impl AppId {
    pub const ALL: [AppId; APP_COUNT] = [
        Self::Profile,
        Self::Projects,
        Self::Skills,
        Self::Terminal,
        Self::Resume,
        Self::Contact,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable token matching the app catalog id, used for DOM ids and `data-app` hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Terminal => "terminal",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }
}

/// DOM id of the focusable body element inside `app_id`'s window.
pub fn window_body_dom_id(app_id: AppId) -> String {
    format!("window-body-{}", app_id.token())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn grown(self, dw: i32, dh: i32) -> Self {
        Self {
            w: self.w + dw,
            h: self.h + dh,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: MIN_WINDOW_WIDTH,
            h: MIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Usable desktop area reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl ViewportSize {
    pub fn is_mobile(self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}

/// Per-app window record. One exists for every registered app for the whole session; closing a
/// window only clears `is_open`, so geometry and stacking survive a close/reopen cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub is_open: bool,
    /// Only meaningful while `is_open`.
    pub is_minimized: bool,
    pub z_index: u32,
    pub rect: WindowRect,
}

impl WindowState {
    pub fn closed_at(rect: WindowRect) -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            z_index: 1,
            rect,
        }
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::closed_at(WindowRect::default())
    }
}

/// Total mapping of [`AppId`] to [`WindowState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowMap {
    windows: [WindowState; APP_COUNT],
}

impl WindowMap {
    pub fn get(&self, app_id: AppId) -> &WindowState {
        &self.windows[app_id.index()]
    }

    pub fn get_mut(&mut self, app_id: AppId) -> &mut WindowState {
        &mut self.windows[app_id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppId, &WindowState)> + '_ {
        AppId::ALL.into_iter().zip(self.windows.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AppId, &mut WindowState)> + '_ {
        AppId::ALL.into_iter().zip(self.windows.iter_mut())
    }

    /// Highest z-index over every tracked window, open or not.
    pub fn max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub windows: WindowMap,
    /// Focused/highlighted window. Not necessarily the topmost one: minimizing clears it
    /// without raising anything else.
    pub active: Option<AppId>,
}

impl DesktopState {
    pub fn new(windows: WindowMap) -> Self {
        Self {
            windows,
            active: None,
        }
    }

    pub fn window(&self, app_id: AppId) -> &WindowState {
        self.windows.get(app_id)
    }

    pub fn is_active(&self, app_id: AppId) -> bool {
        self.active == Some(app_id)
    }

    /// Visible windows in paint order: ascending z-index, later entries on top.
    pub fn window_stack(&self) -> Vec<AppId> {
        let mut stack: Vec<(u32, AppId)> = self
            .windows
            .iter()
            .filter(|(_, w)| w.is_visible())
            .map(|(app_id, w)| (w.z_index, app_id))
            .collect();
        stack.sort();
        stack.into_iter().map(|(_, app_id)| app_id).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// Start conditions of a move/resize gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub kind: DragKind,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: Option<DragSession>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_at(z_index: u32) -> WindowState {
        WindowState {
            is_open: true,
            z_index,
            ..WindowState::default()
        }
    }

    #[test]
    fn app_tokens_match_serde_names() {
        for app_id in AppId::ALL {
            let encoded = serde_json::to_string(&app_id).expect("serialize app id");
            assert_eq!(encoded, format!("\"{}\"", app_id.token()));
        }
    }

    #[test]
    fn app_index_follows_declaration_order() {
        for (expected, app_id) in AppId::ALL.into_iter().enumerate() {
            assert_eq!(app_id.index(), expected);
        }
    }

    #[test]
    fn window_stack_skips_closed_and_minimized_windows_and_sorts_by_z() {
        let mut state = DesktopState::default();
        *state.windows.get_mut(AppId::Skills) = open_at(7);
        *state.windows.get_mut(AppId::Profile) = open_at(3);
        *state.windows.get_mut(AppId::Contact) = WindowState {
            is_minimized: true,
            ..open_at(9)
        };
        *state.windows.get_mut(AppId::Resume) = WindowState {
            is_open: false,
            ..open_at(12)
        };

        assert_eq!(state.window_stack(), vec![AppId::Profile, AppId::Skills]);
    }

    #[test]
    fn window_stack_breaks_z_ties_by_app_order() {
        let mut state = DesktopState::default();
        *state.windows.get_mut(AppId::Terminal) = open_at(2);
        *state.windows.get_mut(AppId::Projects) = open_at(2);

        assert_eq!(state.window_stack(), vec![AppId::Projects, AppId::Terminal]);
    }

    #[test]
    fn window_body_ids_use_app_tokens() {
        assert_eq!(window_body_dom_id(AppId::Contact), "window-body-contact");
    }

    #[test]
    fn max_z_covers_closed_windows() {
        let mut windows = WindowMap::default();
        windows.get_mut(AppId::Resume).z_index = 41;
        assert_eq!(windows.max_z(), 41);
    }

    #[test]
    fn rect_helpers_apply_deltas() {
        let rect = WindowRect {
            x: 10,
            y: 20,
            w: 600,
            h: 400,
        };
        assert_eq!(rect.offset(-5, 7), WindowRect { x: 5, y: 27, ..rect });
        assert_eq!(
            rect.grown(-400, -300).clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            WindowRect {
                w: 300,
                h: 200,
                ..rect
            }
        );
        assert_eq!(rect.right(), 610);
    }
}
