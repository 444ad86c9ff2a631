//! Voxedit - edit sessions and change tracking for block worlds

pub mod core;
pub mod math;
pub mod block;
pub mod region;
pub mod world;
pub mod pattern;
pub mod mask;
pub mod bag;
pub mod edit;
pub mod ops;
pub mod clipboard;
pub mod history;

pub use clipboard::Clipboard;
pub use edit::{ChangeSet, EditSession};
pub use history::History;
