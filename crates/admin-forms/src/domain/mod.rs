//! Domain Layer
//!
//! Records exchanged with the remote API.
//! This layer has NO external dependencies (except serde for serialization).

mod checklist;
mod entity;
mod system;
mod task;

pub use checklist::{TaskList, TaskListEntry};
pub use entity::{Entity, FormMode, Identifier};
pub use system::System;
pub use task::{Task, TaskStatus};
