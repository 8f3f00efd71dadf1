//! Frontend Models
//!
//! Records exchanged with the remote API, shared with the forms crate.

pub use admin_forms::{Identifier, System, Task, TaskListEntry};
