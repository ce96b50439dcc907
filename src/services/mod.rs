//! Domain services of the mock Graph API.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the operation logic so callers only deal with typed
//! payloads and `GraphError`. Every function borrows the `MockGraph`
//! context, simulates latency, restores the session snapshot, and gates on
//! authentication before touching fixtures.

pub mod auth;
pub mod calendar;
pub mod drive;
pub mod mail;
pub mod user;
