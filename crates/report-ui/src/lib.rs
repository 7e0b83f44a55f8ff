//! Terminal UI layer for the ticket report tool.
//!
//! Provides themes, the dashboard view over the result store, the analysis
//! preview view, and the main application event loop built on top of
//! [`ratatui`].

pub mod app;
pub mod components;
pub mod dashboard_view;
pub mod preview_view;
pub mod themes;

pub use report_core as core;
