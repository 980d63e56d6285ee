//! Transport Hub library
//!
//! Resource browsing, inventory adjustment, dispatch, tracking and reporting
//! services for a logistics hub, backed by in-memory repositories seeded from
//! fixtures.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod events;
pub mod fixtures;
pub mod models;
pub mod navigation;
pub mod repositories;
pub mod resource;
pub mod services;

pub use errors::ServiceError;
pub use events::{Event, EventSender};
pub use services::AppServices;
