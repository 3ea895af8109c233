use tracing::trace;

use super::catalog::EntryMap;
use super::surface::PaletteSurface;
use super::types::{CLICK, DRAG_START, DispatchOutcome, EntryAction, PointerEvent};

/// Routes a delegated pointer interaction to the owning entry's handler.
///
/// Resolution order: target element, then its stored entry id, then the
/// entry in the *current* catalog. A missing target consumes the interaction
/// outright (palette chrome never leaks pointer events to the canvas); a
/// target without a catalog entry is ignored so default handling proceeds.
/// Once an entry is found the interaction is consumed whether or not a
/// handler fired for this particular action name.
pub fn dispatch(
    surface: &PaletteSurface,
    catalog: &EntryMap,
    action_name: &str,
    event: &PointerEvent,
    auto_activate: bool,
) -> DispatchOutcome {
    let Some(target) = event.target else {
        return DispatchOutcome::Consumed;
    };
    let Some(element) = surface.element(target) else {
        return DispatchOutcome::Consumed;
    };

    let Some(entry_id) = element.entry_id.as_deref() else {
        return DispatchOutcome::Ignored;
    };
    let Some(entry) = catalog.get(entry_id) else {
        return DispatchOutcome::Ignored;
    };

    match &entry.action {
        Some(EntryAction::Single(action)) if action_name == CLICK => {
            trace!(entry_id, action_name, "palette entry activated");
            action(event, auto_activate);
        }
        Some(EntryAction::Named(actions)) => {
            if let Some(action) = actions.get(action_name) {
                trace!(entry_id, action_name, "palette entry activated");
                action(event, auto_activate);
            }
        }
        _ => {}
    }

    DispatchOutcome::Consumed
}

/// Convenience wrapper for drag-start interactions.
pub fn dispatch_drag_start(
    surface: &PaletteSurface,
    catalog: &EntryMap,
    event: &PointerEvent,
) -> DispatchOutcome {
    dispatch(surface, catalog, DRAG_START, event, false)
}

/// Mousedown anywhere on the mount stops propagating to the canvas, so
/// interacting with the palette can never start a diagram drag.
pub fn intercept_mouse_down(_event: &PointerEvent) -> DispatchOutcome {
    DispatchOutcome::Consumed
}
