use tracing::debug;

use crate::config::LayoutConfig;
use crate::event::{EventBus, PaletteNotice};

use super::surface::PaletteSurface;

/// Explicit facet changes; an omitted `two_column` is derived from the
/// available space and the current entry count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChange {
    pub open: Option<bool>,
    pub two_column: Option<bool>,
}

/// Owns the two display facets and their derivation.
///
/// The facets themselves live on the surface wrapper (as markers); the
/// controller only holds the metrics and the last reported mount height, so
/// the column choice is re-derivable at any time.
#[derive(Debug, Clone, Copy)]
pub struct LayoutController {
    metrics: LayoutConfig,
    available_height: Option<u16>,
}

impl LayoutController {
    pub fn new(metrics: LayoutConfig) -> Self {
        Self {
            metrics,
            available_height: None,
        }
    }

    pub fn set_available_height(&mut self, height: u16) {
        self.available_height = Some(height);
    }

    /// Applies explicit facets, derives the omitted column facet, and
    /// notifies the bus with the resulting state.
    pub fn apply_state(
        &self,
        surface: &mut PaletteSurface,
        bus: &mut EventBus,
        change: StateChange,
        entry_count: usize,
    ) {
        if let Some(open) = change.open {
            surface.markers.open = open;
        }
        surface.markers.two_column = change
            .two_column
            .unwrap_or_else(|| self.derive_two_column(entry_count));

        debug!(
            open = surface.markers.open,
            two_column = surface.markers.two_column,
            "palette layout changed"
        );
        bus.emit(PaletteNotice::StateChanged {
            open: surface.markers.open,
            two_column: surface.markers.two_column,
        });
    }

    pub fn open(&self, surface: &mut PaletteSurface, bus: &mut EventBus, entry_count: usize) {
        self.apply_state(
            surface,
            bus,
            StateChange {
                open: Some(true),
                two_column: None,
            },
            entry_count,
        );
    }

    pub fn close(&self, surface: &mut PaletteSurface, bus: &mut EventBus, entry_count: usize) {
        self.apply_state(
            surface,
            bus,
            StateChange {
                open: Some(false),
                two_column: Some(false),
            },
            entry_count,
        );
    }

    pub fn toggle(&self, surface: &mut PaletteSurface, bus: &mut EventBus, entry_count: usize) {
        self.apply_state(
            surface,
            bus,
            StateChange {
                open: Some(!surface.markers.open),
                two_column: None,
            },
            entry_count,
        );
    }

    /// Mount resize re-derives the column facet only; `open` is untouched.
    pub fn on_resize(
        &mut self,
        surface: &mut PaletteSurface,
        bus: &mut EventBus,
        height: u16,
        entry_count: usize,
    ) {
        self.set_available_height(height);
        self.apply_state(surface, bus, StateChange::default(), entry_count);
    }

    /// Two columns iff the entries would not fit in one:
    /// `available < entry_count * entry_height + margins`. Before the first
    /// size report the palette stays single-column.
    fn derive_two_column(&self, entry_count: usize) -> bool {
        let Some(available) = self.available_height else {
            return false;
        };
        let needed = (entry_count as u32)
            .saturating_mul(u32::from(self.metrics.entry_height))
            .saturating_add(u32::from(self.metrics.margin_total()));
        u32::from(available) < needed
    }
}
