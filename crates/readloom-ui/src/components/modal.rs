//! Generic dialog shell driven by a registry [`ModalConfig`].

use crate::core::modal::ModalConfig;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalViewProps {
    pub config: ModalConfig,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub footer: Html,
}

/// Presentational dialog. Open/closed state lives in the registry; whoever
/// renders this component has already read an open config for its channel.
#[function_component(ModalView)]
pub(crate) fn modal_view(props: &ModalViewProps) -> Html {
    let config = &props.config;

    {
        let on_close = props.on_close.clone();
        let keyboard = config.keyboard;
        use_effect_with_deps(
            move |&keyboard: &bool| {
                let listener = keyboard.then(|| {
                    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<web_sys::KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    })
                });
                move || drop(listener)
            },
            keyboard,
        );
    }

    let classes = classes!(
        "modal",
        "modal-open",
        format!("modal-{}", config.size.as_str()),
        config.centered.then_some("modal-centered"),
        config.scrollable.then_some("modal-scrollable"),
    );
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        let locked = config.static_backdrop;
        Callback::from(move |_| {
            if !locked {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="modal-box">
                <div class="modal-header">
                    <h3>{config.title.clone()}</h3>
                    <button class="btn btn-ghost" aria-label="Close" onclick={on_close_click}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                { props.footer.clone() }
            </div>
            <button class="modal-backdrop" onclick={on_backdrop}></button>
        </div>
    }
}
