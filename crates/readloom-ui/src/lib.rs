#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
//! Readloom web UI.
//!
//! The crate splits into a host-testable core (`core`, `models`, `services`)
//! and the wasm-only Yew shell (`app`, `components`). The core carries the
//! coordination contracts: the modal channel registry, the toast bus, the
//! confirmation service, the HTTP gateway, and the persisted theme
//! preference.

pub mod core;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
