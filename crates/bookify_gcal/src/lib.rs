// --- File: crates/bookify_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod routes;
pub mod source;
