//! Domain models for Chatty.
//!
//! - [`Task`]: a description plus completion flag, in one of three [`TaskKind`]s
//!   (to-do, deadline, event).
//! - [`TaskList`]: the ordered owner of every live task. Positions are the only
//!   identity a task has; duplicates are allowed.

mod task;
mod task_list;

pub use task::*;
pub use task_list::*;
