//! Drag-to-dismiss bottom sheet.
//!
//! [`SheetController`] turns a vertical drag into a sheet offset, resists
//! over-drag past the open position, and on release either springs back open
//! or slides closed. The host feeds it drag samples and frame timestamps and
//! renders [`SheetState`].

mod config;
mod controller;

pub use accent_foundation::DragSample;
pub use config::*;
pub use controller::*;
