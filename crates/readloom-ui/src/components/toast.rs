//! Toast host: renders the broadcast toast list and owns the dismiss timers.

use crate::core::store::AppStore;
use crate::core::toast::{DEFAULT_TOAST_DURATION_MS, Toast};
use gloo_timers::callback::Timeout;
use std::collections::{HashMap, HashSet};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.clone());
    let dispatch = Dispatch::<AppStore>::new();
    // One cancellable handle per toast id. Dropping a handle cancels the
    // pending callback, so a manual dismissal silences its timer.
    let timers = use_mut_ref(HashMap::<String, Timeout>::new);

    {
        let list = toasts.notifications().to_vec();
        let dispatch = dispatch.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let live: HashSet<&str> = list.iter().map(|toast| toast.id.as_str()).collect();
                timers.retain(|id, _| live.contains(id.as_str()));
                for toast in list.iter().filter(|toast| toast.auto_dismisses()) {
                    if !timers.contains_key(&toast.id) {
                        let dispatch = dispatch.clone();
                        let id = toast.id.clone();
                        let delay = u32::try_from(toast.duration_ms)
                            .unwrap_or(DEFAULT_TOAST_DURATION_MS as u32);
                        timers.insert(
                            toast.id.clone(),
                            Timeout::new(delay, move || {
                                dispatch.reduce_mut(|store| store.toasts.remove(&id));
                            }),
                        );
                    }
                }
                || ()
            },
            list,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts
                .notifications()
                .iter()
                .map(|toast| render_toast(toast, &dispatch))}
        </div>
    }
}

fn render_toast(toast: &Toast, dispatch: &Dispatch<AppStore>) -> Html {
    let id = toast.id.clone();
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let id = id.clone();
            dispatch.reduce_mut(move |store| store.toasts.remove(&id));
        })
    };

    html! {
        <div key={toast.id.clone()} class={classes!("toast", toast.kind.alert_class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
