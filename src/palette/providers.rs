use super::catalog::EntryMap;
use super::types::{Contribution, Entry, EntryProvider};

/// Provider contributing a fixed entry set.
///
/// Covers the common case of a feature module with a static tool list;
/// modules with locale- or state-dependent entries implement
/// [`EntryProvider`] themselves.
pub struct StaticProvider {
    entries: EntryMap,
}

impl StaticProvider {
    pub fn new(entries: impl IntoIterator<Item = (String, Entry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Entry)> for StaticProvider {
    fn from_iter<I: IntoIterator<Item = (S, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl EntryProvider for StaticProvider {
    fn entries(&self) -> Contribution {
        Contribution::Merge(self.entries.clone())
    }
}

/// Provider wrapping a closure, for contributions computed per collection
/// (the closure is re-invoked on every catalog rebuild).
pub struct FnProvider<F>(pub F);

impl<F: Fn() -> Contribution> EntryProvider for FnProvider<F> {
    fn entries(&self) -> Contribution {
        self.0()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::palette::types::{Contribution, Entry, EntryProvider};
    use crate::palette::EntryMap;

    use super::{FnProvider, StaticProvider};

    #[test]
    fn static_provider_merges_its_fixed_entries() {
        let provider = StaticProvider::from_iter([("save", Entry::new().with_title("Save"))]);
        let Contribution::Merge(entries) = provider.entries() else {
            panic!("static provider should merge");
        };
        assert_eq!(entries.len(), 1);
        assert!(entries.contains("save"));
    }

    #[test]
    fn fn_provider_recomputes_on_every_request() {
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);
        let provider = FnProvider(move || {
            counted.set(counted.get() + 1);
            Contribution::Merge(EntryMap::new())
        });

        provider.entries();
        provider.entries();
        assert_eq!(calls.get(), 2);
    }
}
