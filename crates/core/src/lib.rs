//! `ripple-core` — the push-based stream primitive.
//!
//! This crate contains the **subscription contract only**: an
//! [`Observable`] drives an [`Observer`] with zero or more `on_next` calls
//! followed by at most one terminal call (`on_complete` or `on_error`).
//! Operators and execution contexts live in their own crates
//! (`ripple-ops`, `ripple-exec`).

pub mod observable;
pub mod observer;

pub use observable::{Fault, Observable, SharedObserver};
pub use observer::{CallbackObserver, Observer};
