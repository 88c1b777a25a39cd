//! UI Modules
//!
//! Each module implements the Module trait and handles its own key input.
//! Rendering lives in `ui`.
//!
//! Modules:
//! - header: banner with the "back to factory" button
//! - tabs: tab panels and the controller that shows one at a time
//! - wallet_list: wallet table model and the selection flow

pub mod header;
pub mod tabs;
pub mod wallet_list;
