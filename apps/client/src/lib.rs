//! Headless client for the resume review workflow.
//!
//! Mirrors the browser client's architecture: an [`api::ApiClient`] that
//! attaches scoped bearer tokens to every call, one thunk per remote
//! operation, and a [`store::Store`] of per-domain slices that reduce
//! thunk lifecycle events into view-consumable state. The embedding UI
//! shell renders the view models in [`views`] and forwards user actions
//! back into the thunks.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod store;
pub mod thunks;
pub mod views;
