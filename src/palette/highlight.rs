use tracing::trace;

use super::surface::{ElementKind, PaletteSurface};

/// Suffix stripped from entry ids before comparing against the active tool.
const TOOL_SUFFIX: &str = "-tool";

/// Reflects the externally announced active tool onto the tools group.
///
/// An element is highlighted iff it is a default interactive entry and its
/// id, with one trailing `-tool` stripped, equals `tool_name`; every other
/// tools-group element has its marker cleared. Groups other than `tools`
/// are never touched.
pub fn highlight(surface: &mut PaletteSurface, tool_name: &str) {
    let Some(group_index) = surface.tools_group_index() else {
        return;
    };

    trace!(tool_name, "synchronizing tool highlight");
    for element in surface.group_elements_mut(group_index) {
        let comparison_name = element
            .entry_id
            .as_deref()
            .map(|id| id.strip_suffix(TOOL_SUFFIX).unwrap_or(id));
        element.highlighted =
            element.kind == ElementKind::Interactive && comparison_name == Some(tool_name);
    }
}

#[cfg(test)]
mod tests {
    use crate::palette::render::render;
    use crate::palette::surface::{PaletteSurface, TOOLS_GROUP};
    use crate::palette::types::Entry;
    use crate::palette::EntryMap;

    use super::highlight;

    fn tools_surface() -> (PaletteSurface, EntryMap) {
        let catalog = EntryMap::from_iter([
            ("save", Entry::new()),
            ("move-tool", Entry::new().in_group(TOOLS_GROUP)),
            ("zoom-tool", Entry::new().in_group(TOOLS_GROUP)),
            ("lasso", Entry::new().in_group(TOOLS_GROUP)),
            ("spacer", Entry::separator().in_group(TOOLS_GROUP)),
        ]);
        let mut surface = PaletteSurface::new();
        render(&mut surface, &catalog);
        (surface, catalog)
    }

    fn highlighted_ids(surface: &PaletteSurface) -> Vec<String> {
        surface
            .groups()
            .iter()
            .flat_map(|group| group.elements.iter())
            .filter(|element| element.highlighted)
            .filter_map(|element| element.entry_id.clone())
            .collect()
    }

    #[test]
    fn exactly_the_matching_tool_is_highlighted() {
        let (mut surface, _catalog) = tools_surface();
        highlight(&mut surface, "move");
        assert_eq!(highlighted_ids(&surface), vec!["move-tool".to_string()]);
    }

    #[test]
    fn ids_without_tool_suffix_compare_verbatim() {
        let (mut surface, _catalog) = tools_surface();
        highlight(&mut surface, "lasso");
        assert_eq!(highlighted_ids(&surface), vec!["lasso".to_string()]);
    }

    #[test]
    fn switching_tools_moves_the_marker() {
        let (mut surface, _catalog) = tools_surface();
        highlight(&mut surface, "move");
        highlight(&mut surface, "zoom");
        assert_eq!(highlighted_ids(&surface), vec!["zoom-tool".to_string()]);
    }

    #[test]
    fn unknown_tool_clears_every_marker() {
        let (mut surface, _catalog) = tools_surface();
        highlight(&mut surface, "move");
        highlight(&mut surface, "no-such");
        assert!(highlighted_ids(&surface).is_empty());
    }

    #[test]
    fn entries_outside_the_tools_group_are_untouched() {
        let (mut surface, _catalog) = tools_surface();
        // "save" lives in the default group and shares no suffix rules.
        highlight(&mut surface, "save");
        assert!(highlighted_ids(&surface).is_empty());
    }

    #[test]
    fn missing_tools_group_is_a_no_op() {
        let catalog = EntryMap::from_iter([("save", Entry::new())]);
        let mut surface = PaletteSurface::new();
        render(&mut surface, &catalog);
        highlight(&mut surface, "move");
        assert!(highlighted_ids(&surface).is_empty());
    }
}
