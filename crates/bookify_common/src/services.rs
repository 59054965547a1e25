// --- File: crates/bookify_common/src/services.rs ---
//! Service abstractions shared across the Bookify crates.
//!
//! The widget core talks to external collaborators (the busy-interval
//! feed) through traits so that handlers can be exercised against
//! in-memory implementations in tests.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;
