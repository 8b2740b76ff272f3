//! Gateway, confirmation, and domain resource services.

pub mod api;
pub mod authors;
pub mod calendar;
pub mod collections;
pub mod confirm;
pub mod modals;
pub mod root_folders;
pub mod series;
