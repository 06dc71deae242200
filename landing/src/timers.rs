//! Ownership table for scheduled timers.
//!
//! Every scheduling call the controller makes returns a [`TimerId`]; the id
//! is recorded here together with the [`Task`] to run when it fires. One-shot
//! entries are forgotten on fire, interval entries stay until cancelled.
//! Teardown drains the table so nothing the controller scheduled can outlive it,
//! finishing any task that owns a transient node.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::collections::HashMap;

use crate::host::TimerId;

/// Deferred work attached to a timer.
#[derive(Clone, Debug, PartialEq)]
pub enum Task<E> {
    /// Clear the press-scale transform on a button.
    ClearTransform(E),
    /// Detach a transient node (ripple, pulse ring, notification).
    RemoveNode(E),
    /// Slide a notification into view.
    NotificationEnter(E),
    /// Slide a notification out, then schedule its removal.
    NotificationExit(E),
    /// Append a pulse ring to the play button. Repeats.
    PulseTick(E),
    /// The resize debounce window elapsed.
    ResizeSettled,
}

impl<E> Task<E> {
    /// Whether the task stays scheduled after it fires.
    #[must_use]
    pub fn repeats(&self) -> bool {
        matches!(self, Self::PulseTick(_))
    }
}

/// Scheduled timers keyed by id.
#[derive(Debug)]
pub struct Timers<E> {
    tasks: HashMap<TimerId, Task<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self { tasks: HashMap::new() }
    }
}

impl<E: Clone> Timers<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what `id` is for.
    pub fn track(&mut self, id: TimerId, task: Task<E>) {
        self.tasks.insert(id, task);
    }

    /// Resolve a fired timer. One-shot tasks are removed; repeating ones are cloned.
    pub fn fire(&mut self, id: TimerId) -> Option<Task<E>> {
        if self.tasks.get(&id)?.repeats() {
            return self.tasks.get(&id).cloned();
        }
        self.tasks.remove(&id)
    }

    /// Stop tracking `id`. Returns whether it was tracked.
    pub fn forget(&mut self, id: TimerId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Remove and return every tracked entry, ordered by id.
    pub fn drain(&mut self) -> Vec<(TimerId, Task<E>)> {
        let mut entries: Vec<(TimerId, Task<E>)> = self.tasks.drain().collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}
