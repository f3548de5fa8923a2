use super::*;
use crate::model::{window_body_dom_id, DragKind, WindowState};
use system_ui::{
    IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button presses only; touch and pen must be the primary pointer.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn frame_style(window: &WindowState) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        window.rect.x, window.rect.y, window.rect.w, window.rect.h, window.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = apps::app_descriptor(app_id);

    let window = Signal::derive(move || runtime.state.with(|state| *state.window(app_id)));
    let focused = Signal::derive(move || runtime.state.with(|state| state.is_active(app_id)));
    let style = Signal::derive(move || frame_style(&window.get()));

    let begin_drag = move |ev: web_sys::PointerEvent, kind: DragKind| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            app_id,
            kind,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <WindowFrame
            id=format!("window-{}", app_id.token())
            style=style
            aria_label=descriptor.title
            focused=focused
            on_pointerdown=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::FocusApp { app_id });
            })
        >
            <WindowTitleBar
                focused=focused
                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                    begin_drag(ev, DragKind::Move)
                })
            >
                <WindowTitle>
                    <Icon icon=descriptor.icon size=IconSize::Sm />
                    <span>{descriptor.title.to_uppercase()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        ui_slot="minimize"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
                        })
                    >
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Maximize window"
                        ui_slot="maximize"
                        disabled=true
                    >
                        <Icon icon=IconName::WindowMaximize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        ui_slot="close"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id });
                        })
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody id=window_body_dom_id(app_id)>
                {apps::render_window_contents(app_id)}
                <span data-ui-slot="corner-nw" aria-hidden="true"></span>
                <span data-ui-slot="corner-ne" aria-hidden="true"></span>
                <span data-ui-slot="corner-sw" aria-hidden="true"></span>
                <span data-ui-slot="corner-se" aria-hidden="true"></span>
            </WindowBody>
            <ResizeHandle
                corner="se"
                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                    begin_drag(ev, DragKind::Resize)
                })
            />
        </WindowFrame>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    #[test]
    fn frame_style_positions_and_stacks_window() {
        let window = WindowState {
            is_open: true,
            is_minimized: false,
            z_index: 7,
            rect: WindowRect {
                x: -20,
                y: 35,
                w: 640,
                h: 480,
            },
        };

        assert_eq!(
            frame_style(&window),
            "left:-20px;top:35px;width:640px;height:480px;z-index:7;"
        );
    }
}
