//! Reactive container around [`reduce_desktop`].
//!
//! Every interaction goes through [`DesktopRuntimeContext::dispatch_action`]: the reducer runs on
//! a copy of the current state and signals are only written when something actually changed, so
//! rejected or no-op actions never wake subscribers.

use leptos::*;

use crate::{
    apps, effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
    reflow,
};

#[derive(Clone, Copy)]
/// Handle shared with every shell component through Leptos context.
pub struct DesktopRuntimeContext {
    /// Browser bridge used by the effect executor.
    pub host: StoredValue<DesktopHostContext>,
    /// Window map and active window.
    pub state: RwSignal<DesktopState>,
    /// In-flight move/resize gesture.
    pub interaction: RwSignal<InteractionState>,
    /// Effects emitted by the reducer and not yet executed.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer entry point.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Runs one action against the signals. Returns the reducer error, if any, without touching them.
fn commit(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) -> Result<(), ReducerError> {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let emitted = reduce_desktop(&mut desktop, &mut ui, action)?;

    if state.with_untracked(|current| *current != desktop) {
        state.set(desktop);
    }
    if interaction.with_untracked(|current| *current != ui) {
        interaction.set(ui);
    }
    if !emitted.is_empty() {
        effects.update(|queue| queue.extend(emitted));
    }
    Ok(())
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// Window geometry is seeded once from the app catalog and the viewport at mount time.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let initial = reflow::initial_windows(host.get_value().viewport(), apps::app_registry());
    let state = create_rw_signal(DesktopState::new(initial));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        if let Err(err) = commit(state, interaction, effects, action) {
            logging::debug_warn!("desktop reducer rejected action: {err}");
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };
    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
