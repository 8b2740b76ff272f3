//! Confirmation prompt service.
//!
//! # Design
//! - `confirm` is a plain async call: open the shared confirmation dialog,
//!   suspend, and resume with `true` or `false`. Callers never wire up result
//!   subscriptions by hand.
//! - The service holds at most one pending answer. A new prompt supersedes an
//!   unanswered one, which resolves `false`; a dropped dialog also resolves
//!   `false`. A caller can never hang forever.
//! - The dialog itself is the `deleteConfirmationModal` channel, so the
//!   registry's open/result bookkeeping stays observable to everything else.

use crate::core::modal::{
    ConfirmPrompt, ModalAction, ModalConfig, ModalId, ModalPayload, ModalResult, ModalSize,
};
use crate::core::store::AppStore;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Shared gate in front of destructive or consequential actions.
#[derive(Clone, Debug, Default)]
pub struct ConfirmService {
    pending: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl PartialEq for ConfirmService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl ConfirmService {
    /// A service with no pending prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `prompt` and wait for the user's answer.
    ///
    /// Supersedes any prompt that is still unanswered; the superseded caller
    /// resumes with `false`.
    pub async fn confirm(&self, dispatch: &Dispatch<AppStore>, prompt: ConfirmPrompt) -> bool {
        let (sender, receiver) = oneshot::channel();
        if let Some(superseded) = self.pending.borrow_mut().replace(sender) {
            let _ = superseded.send(false);
        }
        let title = prompt.title.clone();
        dispatch.reduce_mut(|store| {
            store.modals.open(
                ModalConfig::new(ModalId::DeleteConfirmation, title)
                    .with_size(ModalSize::Small)
                    .centered()
                    .with_data(ModalPayload::Confirm(prompt)),
            );
        });
        receiver.await.unwrap_or(false)
    }

    /// Ask before deleting `item_name`.
    pub async fn confirm_delete(&self, dispatch: &Dispatch<AppStore>, item_name: &str) -> bool {
        self.confirm(dispatch, ConfirmPrompt::delete(item_name)).await
    }

    /// Ask with cautionary copy.
    pub async fn confirm_warning(
        &self,
        dispatch: &Dispatch<AppStore>,
        title: &str,
        message: &str,
    ) -> bool {
        self.confirm(dispatch, ConfirmPrompt::warning(title, message))
            .await
    }

    /// Ask with neutral copy.
    pub async fn confirm_info(
        &self,
        dispatch: &Dispatch<AppStore>,
        title: &str,
        message: &str,
    ) -> bool {
        self.confirm(dispatch, ConfirmPrompt::info(title, message))
            .await
    }

    /// Called by the dialog when the user picks a button. Publishes the
    /// result, closes the channel, and resumes the waiting caller.
    pub fn resolve(&self, dispatch: &Dispatch<AppStore>, confirmed: bool) {
        let action = if confirmed {
            ModalAction::Confirm
        } else {
            ModalAction::Cancel
        };
        dispatch.reduce_mut(|store| {
            store
                .modals
                .set_result(ModalId::DeleteConfirmation, ModalResult::new(action));
            store.modals.close(ModalId::DeleteConfirmation);
        });
        if let Some(sender) = self.pending.borrow_mut().take() {
            let _ = sender.send(confirmed);
        }
    }

    /// Drop the pending answer without touching the registry. The waiting
    /// caller resumes with `false`. Used when the dialog unmounts.
    pub fn dismiss(&self) {
        if let Some(sender) = self.pending.borrow_mut().take() {
            let _ = sender.send(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfirmService;
    use crate::core::modal::{ConfirmPrompt, ModalAction, ModalId};
    use crate::core::store::AppStore;
    use yewdux::prelude::Dispatch;

    #[test]
    fn confirm_round_trip_resolves_true() {
        let dispatch = Dispatch::<AppStore>::new();
        let service = ConfirmService::new();

        let confirmed = futures::executor::block_on(async {
            let ask = service.confirm(&dispatch, ConfirmPrompt::delete("Berserk"));
            let answer = async {
                // `join!` polls left to right, so the dialog is open by the
                // time this future runs.
                assert!(dispatch.get().modals.is_open(ModalId::DeleteConfirmation));
                service.resolve(&dispatch, true);
            };
            let (confirmed, ()) = futures::join!(ask, answer);
            confirmed
        });

        assert!(confirmed);
        let store = dispatch.get();
        assert!(!store.modals.is_open(ModalId::DeleteConfirmation));
        let result = store
            .modals
            .result(ModalId::DeleteConfirmation)
            .expect("published result");
        assert_eq!(result.action, ModalAction::Confirm);
    }

    #[test]
    fn declining_resolves_false_with_cancel_result() {
        let dispatch = Dispatch::<AppStore>::new();
        let service = ConfirmService::new();

        let confirmed = futures::executor::block_on(async {
            let ask = service.confirm_warning(&dispatch, "Unlink folder", "Series stay on disk.");
            let answer = async { service.resolve(&dispatch, false) };
            futures::join!(ask, answer).0
        });

        assert!(!confirmed);
        let store = dispatch.get();
        let result = store
            .modals
            .result(ModalId::DeleteConfirmation)
            .expect("published result");
        assert_eq!(result.action, ModalAction::Cancel);
    }

    #[test]
    fn superseded_prompt_resolves_false() {
        let dispatch = Dispatch::<AppStore>::new();
        let service = ConfirmService::new();

        let (first, second) = futures::executor::block_on(async {
            let first = service.confirm(&dispatch, ConfirmPrompt::info("First", "first"));
            let second = service.confirm(&dispatch, ConfirmPrompt::delete("the second item"));
            let answer = async { service.resolve(&dispatch, true) };
            let (first, second, ()) = futures::join!(first, second, answer);
            (first, second)
        });

        assert!(!first);
        assert!(second);
    }

    #[test]
    fn dismiss_resolves_false() {
        let dispatch = Dispatch::<AppStore>::new();
        let service = ConfirmService::new();

        let confirmed = futures::executor::block_on(async {
            let ask = service.confirm(&dispatch, ConfirmPrompt::delete("anything"));
            let drop_dialog = async { service.dismiss() };
            futures::join!(ask, drop_dialog).0
        });

        assert!(!confirmed);
    }
}
