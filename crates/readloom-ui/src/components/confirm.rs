//! Host dialog for the confirmation prompt service.

use crate::components::modal::ModalView;
use crate::core::modal::{ModalId, ModalPayload};
use crate::core::store::AppStore;
use crate::services::confirm::ConfirmService;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    /// The service whose pending prompt this dialog answers.
    pub service: ConfirmService,
}

/// Renders the `deleteConfirmationModal` channel and routes the user's choice
/// back through [`ConfirmService::resolve`].
#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let config = use_selector(|store: &AppStore| {
        store.modals.config(ModalId::DeleteConfirmation).cloned()
    });

    let Some(config) = (*config).clone() else {
        return html! {};
    };
    let ModalPayload::Confirm(prompt) = config.data.clone() else {
        return html! {};
    };

    let on_confirm = {
        let service = props.service.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| service.resolve(&dispatch, true))
    };
    let on_cancel = {
        let service = props.service.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| service.resolve(&dispatch, false))
    };
    // Backdrop clicks and Escape both count as declining.
    let on_close = {
        let service = props.service.clone();
        Callback::from(move |()| service.resolve(&dispatch, false))
    };

    let footer = html! {
        <div class="modal-footer">
            <button class="btn btn-ghost" onclick={on_cancel}>{prompt.cancel_text.clone()}</button>
            <button class={classes!("btn", prompt.tone.button_class())} onclick={on_confirm}>
                {prompt.confirm_text.clone()}
            </button>
        </div>
    };

    html! {
        <ModalView config={config} on_close={on_close} footer={footer}>
            <div class="confirm-body">
                <span class={classes!("confirm-icon", prompt.tone.icon_class())}></span>
                <p>{prompt.message.clone()}</p>
            </div>
        </ModalView>
    }
}
