//! Toast notification bus.
//!
//! # Design
//! - Many producers, one consumer: any caller may push a toast; the single
//!   `ToastHost` renders the broadcast list.
//! - Insertion order is display order; ids come from a monotonically
//!   increasing counter so a reused slot can never alias an old toast.
//! - This slice is pure state. Auto-dismiss timers are scheduled by the host
//!   component, which holds a cancellable handle per toast id.

/// Default lifetime of an auto-dismissing toast, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: i64 = 5_000;

const TOAST_ID_PREFIX: &str = "toast-";

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// A completed action.
    Success,
    /// A failed action.
    Error,
    /// A caution that does not block anything.
    Warning,
    /// Neutral information.
    Info,
}

impl ToastKind {
    /// Stable identifier used in CSS class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Alert class rendered by the toast host.
    #[must_use]
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique id, `toast-<n>`.
    pub id: String,
    /// Human-readable message.
    pub message: String,
    /// Visual category.
    pub kind: ToastKind,
    /// Auto-dismiss delay in milliseconds; zero or negative disables the
    /// timer and the toast stays until dismissed manually.
    pub duration_ms: i64,
}

impl Toast {
    /// Whether a dismiss timer should be scheduled for this toast.
    #[must_use]
    pub const fn auto_dismisses(&self) -> bool {
        self.duration_ms > 0
    }
}

/// Ordered broadcast list of active toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Active toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, duration_ms: i64) -> String {
        self.next_id += 1;
        let id = format!("{TOAST_ID_PREFIX}{}", self.next_id);
        self.toasts.push(Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            duration_ms,
        });
        id
    }

    /// Append a success toast with the default duration.
    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Success, message, DEFAULT_TOAST_DURATION_MS)
    }

    /// Append an error toast with the default duration.
    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Error, message, DEFAULT_TOAST_DURATION_MS)
    }

    /// Append a warning toast with the default duration.
    pub fn warning(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Warning, message, DEFAULT_TOAST_DURATION_MS)
    }

    /// Append an info toast with the default duration.
    pub fn info(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Info, message, DEFAULT_TOAST_DURATION_MS)
    }

    /// Remove a toast by id. Removing an unknown or already-removed id is a
    /// no-op, so a late timer firing after a manual dismissal is harmless.
    pub fn remove(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Remove every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Snapshot of the active toasts, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TOAST_DURATION_MS, ToastKind, ToastState};

    #[test]
    fn toasts_render_in_call_order() {
        let mut state = ToastState::default();
        state.success("a");
        state.error("b");
        state.warning("c");
        let messages: Vec<&str> = state
            .notifications()
            .iter()
            .map(|toast| toast.message.as_str())
            .collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut state = ToastState::default();
        let first = state.info("one");
        state.remove(&first);
        let second = state.info("two");
        assert_ne!(first, second);
        assert_eq!(second, "toast-2");
    }

    #[test]
    fn removal_is_idempotent_and_targeted() {
        let mut state = ToastState::default();
        let keep = state.success("keep");
        let drop_id = state.error("drop");
        state.remove(&drop_id);
        state.remove(&drop_id);
        state.remove("toast-999");
        assert_eq!(state.notifications().len(), 1);
        assert_eq!(state.notifications()[0].id, keep);
    }

    #[test]
    fn default_duration_schedules_a_timer() {
        let mut state = ToastState::default();
        state.success("timed");
        let toast = &state.notifications()[0];
        assert_eq!(toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert!(toast.auto_dismisses());
    }

    #[test]
    fn non_positive_duration_disables_the_timer() {
        let mut state = ToastState::default();
        state.push(ToastKind::Warning, "sticky", 0);
        state.push(ToastKind::Info, "also sticky", -1);
        assert!(state.notifications().iter().all(|t| !t.auto_dismisses()));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut state = ToastState::default();
        state.success("a");
        state.info("b");
        state.clear();
        assert!(state.notifications().is_empty());
    }
}
