use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crossterm::event::MouseEvent;

use super::catalog::EntryMap;

/// Action name a click interaction dispatches under.
pub const CLICK: &str = "click";
/// Action name a drag-start interaction dispatches under.
pub const DRAG_START: &str = "dragstart";

/// Handler invoked with the originating pointer event and the
/// auto-activate flag the host supplied.
pub type ActionFn = Rc<dyn Fn(&PointerEvent, bool)>;

/// Handler shape of one entry.
#[derive(Clone)]
pub enum EntryAction {
    /// One callback, fired for click interactions only.
    Single(ActionFn),
    /// Callbacks keyed by action name; absent names are silently ignored.
    Named(HashMap<String, ActionFn>),
}

impl fmt::Debug for EntryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(_) => f.write_str("EntryAction::Single"),
            Self::Named(map) => {
                let mut names = map.keys().map(String::as_str).collect::<Vec<_>>();
                names.sort_unstable();
                f.debug_tuple("EntryAction::Named").field(&names).finish()
            }
        }
    }
}

/// One palette entry as contributed by a provider.
///
/// Everything but the id (the catalog key) is optional; an entry with no
/// attributes still renders as a default interactive element in the
/// `"default"` group.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub group: Option<String>,
    pub action: Option<EntryAction>,
    pub title: Option<String>,
    pub class_name: Option<String>,
    pub image_url: Option<String>,
    pub separator: bool,
    pub custom_markup: Option<String>,
    pub icon_source: Option<String>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_custom_markup(mut self, markup: impl Into<String>) -> Self {
        self.custom_markup = Some(markup.into());
        self
    }

    pub fn with_icon_source(mut self, icon: impl Into<String>) -> Self {
        self.icon_source = Some(icon.into());
        self
    }

    pub fn on_click(mut self, action: impl Fn(&PointerEvent, bool) + 'static) -> Self {
        self.action = Some(EntryAction::Single(Rc::new(action)));
        self
    }

    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = (S, ActionFn)>,
        S: Into<String>,
    {
        self.action = Some(EntryAction::Named(
            actions
                .into_iter()
                .map(|(name, action)| (name.into(), action))
                .collect(),
        ));
        self
    }
}

/// What one provider yields when asked for its entries.
pub enum Contribution {
    /// A mapping merged into the accumulator key by key (plain overwrite).
    Merge(EntryMap),
    /// An update function replacing the accumulator wholesale.
    Replace(Box<dyn Fn(EntryMap) -> EntryMap>),
}

impl fmt::Debug for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge(map) => f.debug_tuple("Contribution::Merge").field(map).finish(),
            Self::Replace(_) => f.write_str("Contribution::Replace"),
        }
    }
}

/// A contributor of palette entries. Providers are owned by their feature
/// modules; the palette only holds shared handles collected over the bus.
pub trait EntryProvider {
    fn entries(&self) -> Contribution;
}

/// Position of a rendered element inside the surface tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRef {
    pub group: usize,
    pub element: usize,
}

/// A pointer interaction as delegated by the host: the element it resolved
/// under the cursor (if any) plus the underlying platform event.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub target: Option<ElementRef>,
    pub raw: Option<MouseEvent>,
}

impl PointerEvent {
    pub fn at(target: ElementRef) -> Self {
        Self {
            target: Some(target),
            raw: None,
        }
    }

    /// An interaction that did not land on any rendered element.
    pub fn outside() -> Self {
        Self {
            target: None,
            raw: None,
        }
    }

    pub fn with_raw(mut self, raw: MouseEvent) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// Whether the interaction's default platform handling must be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// An entry (or the palette chrome itself) claimed the interaction.
    Consumed,
    /// The interaction landed on non-entry content; default handling applies.
    Ignored,
}

impl DispatchOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
