//! Palette subsystem for a terminal-hosted diagram editor.
//!
//! Independent feature modules contribute tool entries through providers
//! registered on a synchronous event bus. The palette folds those
//! contributions into a catalog, materializes the catalog onto a typed
//! surface tree, adapts its open/column layout to the reported mount size,
//! and routes pointer interactions back to the owning entry's handler.
//!
//! The host editor owns the event loop, the terminal, and the canvas; this
//! crate only consumes [`event::HostSignal`]s and emits
//! [`event::PaletteNotice`]s in return.

pub mod config;
pub mod error;
pub mod event;
pub mod palette;
pub mod ui;
