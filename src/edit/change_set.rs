//! Completed session changes, kept for undo and redo.

use super::change_log::ChangeLog;
use super::session::{replay, EditSession};
use crate::bag::BlockBag;
use crate::world::World;

/// The original and current logs of a finished session.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
    original: ChangeLog,
    current: ChangeLog,
}

impl ChangeSet {
    pub fn new(original: ChangeLog, current: ChangeLog) -> Self {
        Self { original, current }
    }

    pub fn original(&self) -> &ChangeLog {
        &self.original
    }

    pub fn current(&self) -> &ChangeLog {
        &self.current
    }

    /// Number of distinct coordinates changed.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Put back every replaced block, newest first, through a fresh queued
    /// session.
    pub fn undo<'a>(&self, world: &'a mut dyn World, bag: Option<&'a mut dyn BlockBag>) {
        let mut session = Self::replay_session(world, bag);
        log::debug!("Undoing {} block changes", self.original.len());
        replay(&mut session, self.original.iter().rev());
    }

    /// Write every block again in its original order through a fresh queued
    /// session.
    pub fn redo<'a>(&self, world: &'a mut dyn World, bag: Option<&'a mut dyn BlockBag>) {
        let mut session = Self::replay_session(world, bag);
        log::debug!("Redoing {} block changes", self.current.len());
        replay(&mut session, self.current.iter());
    }

    fn replay_session<'a>(world: &'a mut dyn World, bag: Option<&'a mut dyn BlockBag>) -> EditSession<'a> {
        let mut session = EditSession::new(world, None);
        session.set_block_bag(bag);
        session.enable_queue();
        session
    }
}
