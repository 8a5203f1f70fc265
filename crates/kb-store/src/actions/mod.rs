//! User-initiated mutations. Every action follows the same sequence:
//! validate locally, call the gateway, patch the in-memory tree with the
//! expected result, then refresh to reconcile with server truth. A
//! gateway failure is logged and notified and leaves the tree untouched.

pub mod board;
pub mod subtask;
pub mod task;
