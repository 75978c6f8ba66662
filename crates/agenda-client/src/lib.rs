//! # agenda-client
//!
//! Async HTTP client for the blocked-agenda endpoint of the reclamos
//! backend, plus stale-response protection for selection-driven refetches.
//!
//! The booking form refetches a professional's blocked agenda every time
//! the selection changes. Responses can land out of order, so each fetch
//! carries a [`selection::FetchTicket`] snapshot and is applied only while
//! its selection is still current.
//!
//! ## Modules
//!
//! - [`api`] — the REST client for blocked-agenda records
//! - [`config`] — client configuration (base URL, timeout)
//! - [`selection`] — selection generations and fetch tickets
//! - [`error`] — error types

pub mod api;
pub mod config;
pub mod error;
pub mod selection;

pub use api::AgendaApi;
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult};
pub use selection::{FetchTicket, SelectionWatcher};
