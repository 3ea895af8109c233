use tracing::trace;

use crate::event::RegisteredProvider;

use super::types::{Contribution, Entry};

/// Insertion-ordered entry mapping.
///
/// Render order is the order ids were first inserted; overwriting an id
/// replaces the descriptor in place without moving it. Catalogs are small
/// (tens of entries), so the linear key scan is intentional.
#[derive(Debug, Clone, Default)]
pub struct EntryMap {
    entries: Vec<(String, Entry)>,
}

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites; overwrite keeps the id's original position
    /// and replaces the whole descriptor (no field merge).
    pub fn insert(&mut self, id: impl Into<String>, entry: Entry) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, existing_entry)) => *existing_entry = entry,
            None => self.entries.push((id, entry)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

impl IntoIterator for EntryMap {
    type Item = (String, Entry);
    type IntoIter = std::vec::IntoIter<(String, Entry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Entry)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (S, Entry)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, entry) in iter {
            map.insert(id, entry);
        }
        map
    }
}

/// Folds the ordered provider list into one catalog.
///
/// Providers are visited in the given order (descending priority): earlier
/// providers establish the base set, later ones overwrite or transform it.
/// Pure in the providers' current outputs; every call fully recomputes.
pub fn build(providers: &[RegisteredProvider]) -> EntryMap {
    let mut catalog = EntryMap::new();
    for registered in providers {
        match registered.provider.entries() {
            Contribution::Merge(entries) => {
                for (id, entry) in entries {
                    catalog.insert(id, entry);
                }
            }
            Contribution::Replace(update) => {
                catalog = update(catalog);
                trace!(priority = registered.priority, "catalog replaced by provider");
            }
        }
    }
    catalog
}
