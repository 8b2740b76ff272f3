//! Client-side coordination core: modal registry, toast bus, persistence,
//! theme preference, and the shared app store.

pub mod modal;
pub mod storage;
pub mod store;
pub mod theme;
pub mod toast;
