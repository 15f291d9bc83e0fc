//! Quote server module
//!
//! Exposes `GET /cotacao`: fetch the current USD/BRL rate upstream, persist
//! one row, reply with the stored record.

pub mod handlers;
mod server;

pub use server::{build_router, QuoteServer};
