//! valuemeet: a terminal dashboard for meeting evaluations.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod modules;
pub mod store;
pub mod ui;
