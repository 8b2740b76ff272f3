//! Yew components for the Readloom shell and pages.

pub(crate) mod confirm;
pub(crate) mod dashboard;
pub(crate) mod library;
pub(crate) mod modal;
pub(crate) mod shell;
pub(crate) mod toast;
