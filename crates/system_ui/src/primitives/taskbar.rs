use super::*;

#[component]
/// Bottom strip holding the brand, open-window buttons, and status readouts.
pub fn Taskbar(aria_label: &'static str, children: Children) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named group inside the taskbar.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar entry for one open window. `pressed` marks the active window.
pub fn TaskbarButton(
    id: String,
    #[prop(into)] aria_label: Signal<String>,
    data_app: &'static str,
    #[prop(into)] pressed: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class="ui-taskbar-button"
            aria-label=aria_label
            aria-pressed=move || bool_token(pressed.get())
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}
