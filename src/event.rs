use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::palette::EntryProvider;

/// Signals the host editor delivers to the palette, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSignal {
    /// The editor finished mounting; deferred work may now run.
    DiagramReady,
    /// The canvas switched its active tool.
    ActiveToolChanged(String),
    /// Labels and titles may have changed; a full rebuild is required.
    LocaleChanged,
    /// The mount container was resized.
    MountResized { width: u16, height: u16 },
}

/// Notifications the palette emits for other modules to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteNotice {
    /// Fired once, when the palette mounts its surface.
    Created,
    /// Fired after every layout state change.
    StateChanged { open: bool, two_column: bool },
}

/// One provider as gathered by a collection broadcast.
#[derive(Clone)]
pub struct RegisteredProvider {
    pub priority: u32,
    seq: u64,
    pub provider: Rc<dyn EntryProvider>,
}

/// The shared list a collection broadcast carries. Each responder appends
/// itself; the bus sorts the result once every responder has answered.
#[derive(Default)]
pub struct ProviderCollection {
    providers: Vec<RegisteredProvider>,
}

impl ProviderCollection {
    pub fn respond(&mut self, priority: u32, seq: u64, provider: Rc<dyn EntryProvider>) {
        self.providers.push(RegisteredProvider {
            priority,
            seq,
            provider,
        });
    }

    /// Descending priority; ties keep registration order.
    fn into_sorted(mut self) -> Vec<RegisteredProvider> {
        self.providers
            .sort_by(|a, b| b.priority.cmp(&a.priority).then(a.seq.cmp(&b.seq)));
        self.providers
    }
}

type CollectionResponder = Box<dyn Fn(&mut ProviderCollection)>;

/// Synchronous, single-threaded event bus boundary.
///
/// Provider collection is a broadcast: every registered responder appends to
/// a fresh [`ProviderCollection`] on each request, so the answer always
/// reflects the current registration set. Notices queue up until the host
/// drains them; nothing here suspends or re-enters.
#[derive(Default)]
pub struct EventBus {
    responders: Vec<CollectionResponder>,
    next_seq: u64,
    notices: VecDeque<PaletteNotice>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the registration sequence number a responder should answer
    /// with; the bus uses it to keep equal-priority ordering stable.
    pub fn next_collection_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    pub fn respond_to_collection(&mut self, responder: impl Fn(&mut ProviderCollection) + 'static) {
        self.responders.push(Box::new(responder));
    }

    /// Broadcasts a collection request and returns the ordered provider list.
    pub fn request_providers(&mut self) -> Vec<RegisteredProvider> {
        let mut collection = ProviderCollection::default();
        for responder in &self.responders {
            responder(&mut collection);
        }
        let providers = collection.into_sorted();
        trace!(count = providers.len(), "collected palette providers");
        providers
    }

    pub fn emit(&mut self, notice: PaletteNotice) {
        debug!(?notice, "palette notice emitted");
        self.notices.push_back(notice);
    }

    pub fn drain_notices(&mut self) -> Vec<PaletteNotice> {
        self.notices.drain(..).collect()
    }
}
