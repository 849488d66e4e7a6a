// app_state/src/lib.rs
//! Domain state store: the single shared in-memory home for the seven
//! dashboard collections, the crisis flag and the audit trail. One
//! `AppState` is constructed at application start and handed by `Arc` to
//! every consumer; collections live for the life of the process and are
//! discarded with it.

pub mod fixtures;
pub mod mock;
pub mod state;

pub use state::AppState;
