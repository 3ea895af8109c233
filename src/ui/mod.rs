mod panel;

pub use panel::{draw_palette, fit_label};
