//! Definition of the [`Tracer`] instrumentation type and test fixtures built from it.
//!
//! Only built for tests and with the `testing` feature.
//!
//! Each thread keeps its own log, so tests running in parallel do not see each other's records.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};


pub type TracerId = usize;


/// Lifecycle events of a [`Tracer`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    DefaultConstruction,
    Clone,
    Destruction,
}


/// One log record: what happened to which tracer.
pub type LogEntry = (Operation, TracerId);


static COUNTER: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static LOG: RefCell<Vec<LogEntry>> = const { RefCell::new(Vec::new()) };
    static RECORDING: Cell<bool> = const { Cell::new(true) };
}


/// Value that records its default construction, clones and drops in the current thread's log.
///
/// Clones share the id of their origin. Equality, ordering and hashing go by id only.
/// Moves are not observable; a moved value simply shows no clone and no drop.
#[derive(Debug)]
pub struct Tracer {
    id: TracerId,
}


impl Tracer {
    pub fn id(&self) -> TracerId {
        self.id
    }

    /// Snapshot of this thread's log.
    pub fn log() -> Vec<LogEntry> {
        LOG.with(|log| log.borrow().clone())
    }

    pub fn clear_log() {
        LOG.with(|log| log.borrow_mut().clear());
    }

    fn record(&self, operation: Operation) {
        if RECORDING.with(Cell::get) {
            LOG.with(|log| log.borrow_mut().push((operation, self.id)));
        }
    }
}


impl Default for Tracer {
    fn default() -> Self {
        let tracer = Tracer { id: COUNTER.fetch_add(1, Ordering::Relaxed) };
        tracer.record(Operation::DefaultConstruction);
        tracer
    }
}


impl Clone for Tracer {
    fn clone(&self) -> Self {
        let tracer = Tracer { id: self.id };
        tracer.record(Operation::Clone);
        tracer
    }
}


impl Drop for Tracer {
    fn drop(&mut self) {
        self.record(Operation::Destruction);
    }
}


impl PartialEq for Tracer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracer {}

impl PartialOrd for Tracer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Tracer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}


impl fmt::Display for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracer.{}", self.id)
    }
}


/// Suspends recording in the current thread for as long as it is alive.
pub struct Silencer {
    previous: bool,
}


impl Silencer {
    pub fn new() -> Self {
        Silencer { previous: RECORDING.with(|recording| recording.replace(false)) }
    }
}


impl Default for Silencer {
    fn default() -> Self {
        Self::new()
    }
}


impl Drop for Silencer {
    fn drop(&mut self) {
        RECORDING.with(|recording| recording.set(self.previous));
    }
}


/// Keys of the map returned by [`make_test_map`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TestEntry {
    Existing,
    Missing,
}


/// Fresh tracer, constructed without a log record.
pub fn make_test_tracer() -> Tracer {
    let _silencer = Silencer::new();
    Tracer::default()
}


/// `{Existing: tracer}`, constructed without log records.
pub fn make_test_map() -> HashMap<TestEntry, Tracer> {
    let _silencer = Silencer::new();
    HashMap::from([(TestEntry::Existing, Tracer::default())])
}


/// Set of one tracer, constructed without log records.
pub fn make_test_set() -> BTreeSet<Tracer> {
    let _silencer = Silencer::new();
    BTreeSet::from([Tracer::default()])
}


/// Vector of one tracer, constructed without log records.
pub fn make_test_vector() -> Vec<Tracer> {
    let _silencer = Silencer::new();
    vec![Tracer::default()]
}
