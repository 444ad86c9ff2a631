//! Edit sessions and their change tracking.
//!
//! Every block write goes through an [`EditSession`], which records what it
//! replaced and defers blocks that need support until their neighbours are
//! in place. A finished session becomes a [`ChangeSet`] for the history.

pub mod change_log;
pub mod change_set;
pub mod session;
mod reorder;

pub use change_log::ChangeLog;
pub use change_set::ChangeSet;
pub use session::EditSession;
