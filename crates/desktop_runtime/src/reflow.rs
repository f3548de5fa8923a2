//! Viewport-driven placement: first-run geometry and horizontal clamping on resize.

use std::borrow::Cow;

use crate::{
    apps::AppDescriptor,
    model::{ViewportSize, WindowMap, WindowRect, WindowState},
};

/// Gap kept between a clamped window and the viewport edges.
pub const VIEWPORT_MARGIN: i32 = 10;
/// Vertical origin used for every window on mobile viewports.
pub const MOBILE_TOP: i32 = 60;
/// Mobile windows are never taller than this.
pub const MOBILE_MAX_HEIGHT: i32 = 600;
/// Vertical room reserved for the taskbar and top inset on mobile viewports.
pub const MOBILE_VERTICAL_RESERVE: i32 = 120;

/// Builds the session's window records from catalog defaults.
///
/// Mobile viewports stack every window at the same full-width slot; larger viewports use the
/// catalog rectangles as-is.
pub fn initial_windows<'a>(
    viewport: ViewportSize,
    descriptors: impl IntoIterator<Item = &'a AppDescriptor>,
) -> WindowMap {
    let mut windows = WindowMap::default();
    for descriptor in descriptors {
        let rect = if viewport.is_mobile() {
            mobile_rect(viewport)
        } else {
            descriptor.default_rect
        };
        *windows.get_mut(descriptor.app_id) = WindowState::closed_at(rect);
    }
    windows
}

fn mobile_rect(viewport: ViewportSize) -> WindowRect {
    WindowRect {
        x: VIEWPORT_MARGIN,
        y: MOBILE_TOP,
        w: viewport.width - 2 * VIEWPORT_MARGIN,
        h: MOBILE_MAX_HEIGHT.min(viewport.height - MOBILE_VERTICAL_RESERVE),
    }
}

/// Horizontal fit for a single rectangle, or `None` if it already fits.
///
/// Windows wider than the viewport are narrowed to the viewport less both margins and pinned to
/// the left margin; windows overflowing on the right are shifted left. Vertical placement is
/// left alone. The minimum window size is a gesture floor and does not apply here.
pub fn fit_horizontally(viewport: ViewportSize, rect: WindowRect) -> Option<WindowRect> {
    let mut next = rect;
    if next.w > viewport.width {
        next.w = viewport.width - 2 * VIEWPORT_MARGIN;
        next.x = VIEWPORT_MARGIN;
    }
    if next.right() > viewport.width {
        next.x = (viewport.width - next.w - VIEWPORT_MARGIN).max(0);
    }
    (next != rect).then_some(next)
}

/// Reflows every window (open or not) for `viewport`.
///
/// Returns the input borrowed when nothing needed to move, so callers can skip publishing an
/// unchanged map.
pub fn reflow_windows(viewport: ViewportSize, windows: &WindowMap) -> Cow<'_, WindowMap> {
    let mut reflowed: Option<WindowMap> = None;
    for (app_id, window) in windows.iter() {
        if let Some(rect) = fit_horizontally(viewport, window.rect) {
            reflowed
                .get_or_insert_with(|| windows.clone())
                .get_mut(app_id)
                .rect = rect;
        }
    }
    match reflowed {
        Some(map) => Cow::Owned(map),
        None => Cow::Borrowed(windows),
    }
}
