//! Background Tasks Module
//!
//! Periodic maintenance tasks owned by the cache service.

mod cleanup;

pub use cleanup::spawn_sweep_task;
