//! Observable state cells for the console core.
//!
//! Store mutation emits a change notification; dependent computations
//! (resolved permission degrees, visible navigation items) are recomputed
//! on notification, not polled.
//!
//! # Primitives
//!
//! - `get()` — snapshot read (clone of the current value)
//! - `set(value)` / `update(f)` — atomic replacement, then notify
//! - `subscribe(handler)` — observe changes, synchronous callbacks
//!
//! The console runs on a single-threaded event loop, but the cell is
//! fully thread-safe so threaded hosts need no extra locking.

pub mod cell;

pub use cell::{ChangeHandler, StateCell, SubscriptionId};
