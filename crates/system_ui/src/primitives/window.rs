use super::*;

#[component]
/// Absolutely positioned window chrome. Geometry and stacking arrive through `style`.
pub fn WindowFrame(
    id: String,
    #[prop(into)] style: MaybeSignal<String>,
    aria_label: &'static str,
    #[prop(into)] focused: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class="ui-window"
            style=move || style.get()
            role="dialog"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </section>
    }
}

#[component]
/// Window header; pressing it starts a move gesture.
pub fn WindowTitleBar(
    #[prop(into)] focused: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-focused=move || bool_token(focused.get())
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and title group inside the titlebar.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Right-aligned group of titlebar controls.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control (minimize, maximize, close).
///
/// Pointer-down is swallowed so pressing a control never starts a move gesture.
pub fn WindowControlButton(
    aria_label: &'static str,
    ui_slot: &'static str,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=aria_label
            disabled=disabled
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=ui_slot
            on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                forward(on_click)(ev);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Scrollable, focusable content area of a window.
pub fn WindowBody(id: String, children: Children) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-window-body"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Corner grip that starts a resize gesture.
pub fn ResizeHandle(
    corner: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=corner
            on:pointerdown=forward(on_pointerdown)
        ></div>
    }
}
