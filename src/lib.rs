//! Practice-management web application for small law firms: accounts with
//! session login, per-user legal cases, case tasks, and text summaries over
//! a single-file SQLite store.
//!
//! Layout follows a hexagonal split: [`domain`] holds validated types and
//! ports, [`inbound`] the HTTP adapter, [`outbound`] the persistence and
//! summariser adapters, and [`server`] the wiring.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::trace::Trace;
