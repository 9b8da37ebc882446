//! Run Registry
//!
//! In-memory store of all pipeline runs. The single source of truth for the
//! process; owns identifier assignment and guarantees safe concurrent access.
//! Nothing is persisted: the registry starts empty and its contents are
//! discarded at process exit.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use flowline_core::domain::run::{PipelineRun, RunStatus};

/// Concurrency-safe in-memory run store
///
/// A single mutex guards the run map and the id counter, so no reader ever
/// observes a half-written run and concurrent id requests never collide.
/// Runs are never removed; ids are never reused.
pub struct RunRegistry {
    inner: Mutex<Inner>,
}

struct Inner {
    // Keyed by id. Ids are assigned monotonically, so map order is
    // insertion order.
    runs: BTreeMap<u64, PipelineRun>,
    next_id: u64,
}

impl RunRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                runs: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns a fresh id, strictly increasing and never repeated
    pub fn next_id(&self) -> u64 {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    /// Inserts a run keyed by its id.
    ///
    /// The id must come from [`RunRegistry::next_id`] and must not already
    /// be present; inserting a duplicate id is a caller bug.
    pub fn add(&self, run: PipelineRun) {
        let mut inner = self.lock();
        let previous = inner.runs.insert(run.id, run);
        debug_assert!(previous.is_none(), "run id already present");
    }

    /// Returns a copy of the run with the given id, if present
    pub fn get(&self, id: u64) -> Option<PipelineRun> {
        self.lock().runs.get(&id).cloned()
    }

    /// Returns a point-in-time snapshot of every run, in insertion order.
    ///
    /// Mutations after the snapshot is taken are not visible in it.
    pub fn all(&self) -> Vec<PipelineRun> {
        self.lock().runs.values().cloned().collect()
    }

    /// Sets the status of the run with the given id.
    ///
    /// Returns false if no such run exists. The update is visible to
    /// subsequent reads as soon as this returns. Transitions are not
    /// constrained: any status may follow any other.
    pub fn update_status(&self, id: u64, status: RunStatus) -> bool {
        let mut inner = self.lock();
        match inner.runs.get_mut(&id) {
            Some(run) => {
                run.status = status;
                true
            }
            None => false,
        }
    }

    /// Number of runs currently stored
    pub fn len(&self) -> usize {
        self.lock().runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Poisoning implies a panic while the lock was held: nothing useful
        // can be salvaged from the state in that case.
        self.inner.lock().expect("run registry lock poisoned")
    }
}

impl Default for RunRegistry {
    fn default() -> Self {
        Self::new()
    }
}
