mod catalog;
mod core;
mod dispatch;
mod highlight;
mod layout;
pub mod providers;
mod registry;
mod render;
mod surface;
mod types;

pub use catalog::{EntryMap, build};
pub use core::Palette;
pub use dispatch::{dispatch, dispatch_drag_start, intercept_mouse_down};
pub use highlight::highlight;
pub use layout::{LayoutController, StateChange};
pub use registry::ProviderRegistry;
pub use render::render;
pub use surface::{
    DEFAULT_GROUP, DisplayMarkers, ElementKind, ElementNode, GroupNode, PaletteSurface,
    TOOLS_GROUP,
};
pub use types::{
    ActionFn, CLICK, Contribution, DRAG_START, DispatchOutcome, ElementRef, Entry, EntryAction,
    EntryProvider, PointerEvent,
};
