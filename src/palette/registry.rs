use std::rc::Rc;

use tracing::debug;

use crate::event::{EventBus, RegisteredProvider};

use super::types::EntryProvider;

/// Accepts ordered provider registrations and answers collection requests.
///
/// The registry never holds providers itself: registration installs a
/// collection responder on the bus, so every collection request observes the
/// registration set as it currently stands.
#[derive(Debug, Clone, Copy)]
pub struct ProviderRegistry {
    default_priority: u32,
}

impl ProviderRegistry {
    pub fn new(default_priority: u32) -> Self {
        Self { default_priority }
    }

    /// Registers a provider; `priority` defaults to the configured constant.
    /// Higher-priority providers contribute earlier in the catalog fold and
    /// can therefore be overwritten by later, lower-priority ones.
    pub fn register(
        &self,
        bus: &mut EventBus,
        priority: Option<u32>,
        provider: Rc<dyn EntryProvider>,
    ) {
        let priority = priority.unwrap_or(self.default_priority);
        let seq = bus.next_collection_seq();
        debug!(priority, seq, "palette provider registered");
        bus.respond_to_collection(move |collection| {
            collection.respond(priority, seq, Rc::clone(&provider));
        });
    }

    /// Broadcasts a collection request; descending priority, stable ties.
    pub fn collect(&self, bus: &mut EventBus) -> Vec<RegisteredProvider> {
        bus.request_providers()
    }
}
