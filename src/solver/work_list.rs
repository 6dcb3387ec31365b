use std::collections::{HashSet, VecDeque};

use crate::representation::{value::ValueEquality, variable::Variable};

/// An ordered arc between two variables, directed at the first.
pub type Arc<V> = (Variable<V>, Variable<V>);

/// A FIFO queue of arcs awaiting revision, deduplicating pending entries so
/// an arc is never queued twice at once.
pub struct WorkList<V: ValueEquality> {
    queue: VecDeque<Arc<V>>,
    queue_members: HashSet<Arc<V>>,
}

impl<V: ValueEquality> WorkList<V> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: Arc<V>) {
        if !self.queue_members.contains(&arc) {
            self.queue_members.insert(arc.clone());
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc<V>> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<V: ValueEquality> Default for WorkList<V> {
    fn default() -> Self {
        Self::new()
    }
}
