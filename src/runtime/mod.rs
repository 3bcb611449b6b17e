//! Runtime module
//!
//! Provides the async task execution primitive used by upstream operations.

pub mod async_task;

// Re-export async task types
pub use async_task::AsyncTask;
