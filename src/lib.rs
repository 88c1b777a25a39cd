//! Terminal dashboard for threshold signature wallet contracts.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logger;
pub mod modules;
pub mod store;
pub mod ui;
