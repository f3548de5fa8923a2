//! Pointer-driven move and resize gestures.
//!
//! A gesture captures the pointer and window rectangle once at [`begin_drag`]; every
//! [`update_drag`] recomputes the rectangle from those start values, so intermediate pointer
//! samples never accumulate rounding or clamp drift.

use crate::{
    model::{
        DesktopState, DragKind, DragSession, InteractionState, PointerPosition, WindowRect,
        MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
    reducer::ReducerError,
    window_manager, AppId,
};

/// Starts a gesture on `app_id`, raising the window first.
pub fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: AppId,
    kind: DragKind,
    pointer: PointerPosition,
) -> Result<(), ReducerError> {
    if let Some(session) = &interaction.drag {
        return Err(ReducerError::DragInProgress(session.app_id));
    }
    let window = state.window(app_id);
    if !window.is_open {
        return Err(ReducerError::WindowNotOpen(app_id));
    }

    let rect_start = window.rect;
    window_manager::focus_window(state, app_id);
    interaction.drag = Some(DragSession {
        app_id,
        kind,
        pointer_start: pointer,
        rect_start,
    });
    Ok(())
}

/// Applies the pointer delta since the gesture started. Returns `false` when nothing changed.
pub fn update_drag(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> Result<bool, ReducerError> {
    let session = interaction.drag.as_ref().ok_or(ReducerError::NoActiveDrag)?;
    let window = state.windows.get_mut(session.app_id);
    if !window.is_open {
        return Ok(false);
    }

    let next = dragged_rect(session, pointer);
    if window.rect == next {
        return Ok(false);
    }
    window.rect = next;
    Ok(true)
}

/// Ends the current gesture. Ending with no gesture in progress is accepted and does nothing.
pub fn end_drag(interaction: &mut InteractionState) -> Option<DragSession> {
    interaction.drag.take()
}

/// Rectangle for `session` with the pointer at `pointer`.
///
/// Moves are unconstrained; the origin may leave the viewport. Resizes anchor the top-left
/// corner and floor the size at [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`].
pub fn dragged_rect(session: &DragSession, pointer: PointerPosition) -> WindowRect {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    match session.kind {
        DragKind::Move => session.rect_start.offset(dx, dy),
        DragKind::Resize => session
            .rect_start
            .grown(dx, dy)
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
    }
}
