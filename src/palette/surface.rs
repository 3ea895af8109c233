use super::types::ElementRef;

/// Group every entry without an explicit group renders into.
pub const DEFAULT_GROUP: &str = "default";
/// Group the tool highlight synchronizer operates on.
pub const TOOLS_GROUP: &str = "tools";

/// Visual shape of one rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Default interactive element.
    Interactive,
    /// Non-interactive divider.
    Separator,
    /// Raw visual fragment supplied by the entry.
    Custom(String),
    /// Self-contained inline icon payload.
    Icon(String),
}

/// One rendered element inside a group bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Entry id, retrievable by the action dispatcher. Separators carry none.
    pub entry_id: Option<String>,
    pub kind: ElementKind,
    pub title: Option<String>,
    pub class_name: Option<String>,
    pub image_url: Option<String>,
    pub highlighted: bool,
}

/// A named visual bucket, created lazily in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    pub name: String,
    pub elements: Vec<ElementNode>,
}

/// Display facets persisted on the surface wrapper itself. There is no
/// separate layout data structure; these markers are the layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMarkers {
    pub open: bool,
    pub two_column: bool,
}

/// The mounted palette structure: a wrapper carrying display markers, an
/// entries region of group buckets, and the toggle affordance. This tree is
/// the subsystem's only wire format; the drawing layer consumes it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteSurface {
    pub markers: DisplayMarkers,
    pub toggle_title: Option<String>,
    groups: Vec<GroupNode>,
    tools_group: Option<usize>,
}

impl PaletteSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every rendered bucket and invalidates the cached tools-group
    /// handle. Markers survive; display state outlives catalog rebuilds.
    pub fn clear_groups(&mut self) {
        self.groups.clear();
        self.tools_group = None;
    }

    /// Bucket for `name`, created on first use and appended after the
    /// buckets seen before it.
    pub fn group_mut(&mut self, name: &str) -> &mut GroupNode {
        let index = match self.groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(GroupNode {
                    name: name.to_string(),
                    elements: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    pub fn groups(&self) -> &[GroupNode] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&GroupNode> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn element(&self, target: ElementRef) -> Option<&ElementNode> {
        self.groups.get(target.group)?.elements.get(target.element)
    }

    /// Entry id stored on the element at `target`, if any.
    pub fn entry_id_at(&self, target: ElementRef) -> Option<&str> {
        self.element(target)?.entry_id.as_deref()
    }

    /// Locates the rendered element carrying `entry_id`.
    pub fn find_entry(&self, entry_id: &str) -> Option<ElementRef> {
        for (group_idx, group) in self.groups.iter().enumerate() {
            for (element_idx, element) in group.elements.iter().enumerate() {
                if element.entry_id.as_deref() == Some(entry_id) {
                    return Some(ElementRef {
                        group: group_idx,
                        element: element_idx,
                    });
                }
            }
        }
        None
    }

    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|group| group.elements.len()).sum()
    }

    /// Index of the tools bucket, resolved on first use and cached until the
    /// next `clear_groups`.
    pub(crate) fn tools_group_index(&mut self) -> Option<usize> {
        if self.tools_group.is_none() {
            self.tools_group = self.groups.iter().position(|group| group.name == TOOLS_GROUP);
        }
        self.tools_group
    }

    pub(crate) fn group_elements_mut(&mut self, index: usize) -> &mut [ElementNode] {
        self.groups
            .get_mut(index)
            .map(|group| group.elements.as_mut_slice())
            .unwrap_or(&mut [])
    }
}
