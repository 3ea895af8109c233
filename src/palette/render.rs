use tracing::debug;

use super::catalog::EntryMap;
use super::surface::{DEFAULT_GROUP, ElementKind, ElementNode, PaletteSurface};
use super::types::Entry;

/// Materializes the catalog onto the surface.
///
/// Always clears the previously rendered buckets first, so two consecutive
/// renders of the same catalog leave an equivalent tree rather than a
/// superposition. Group buckets appear in first-seen order; elements follow
/// the catalog's insertion order.
pub fn render(surface: &mut PaletteSurface, catalog: &EntryMap) {
    surface.clear_groups();

    for (id, entry) in catalog.iter() {
        let group = entry.group.as_deref().unwrap_or(DEFAULT_GROUP);
        let element = materialize(id, entry);
        surface.group_mut(group).elements.push(element);
    }

    debug!(
        entries = catalog.len(),
        groups = surface.groups().len(),
        "palette rendered"
    );
}

/// Icon beats custom markup beats separator beats the default element.
/// Separators are pure chrome: no entry id, no presentation attributes.
fn materialize(id: &str, entry: &Entry) -> ElementNode {
    let kind = if let Some(icon) = &entry.icon_source {
        ElementKind::Icon(icon.clone())
    } else if let Some(markup) = &entry.custom_markup {
        ElementKind::Custom(markup.clone())
    } else if entry.separator {
        ElementKind::Separator
    } else {
        ElementKind::Interactive
    };

    if kind == ElementKind::Separator {
        return ElementNode {
            entry_id: None,
            kind,
            title: None,
            class_name: None,
            image_url: None,
            highlighted: false,
        };
    }

    ElementNode {
        entry_id: Some(id.to_string()),
        kind,
        title: entry.title.clone(),
        class_name: entry.class_name.clone(),
        image_url: entry.image_url.clone(),
        highlighted: false,
    }
}
