pub mod aggregator;
pub mod background;
pub mod browser;
pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod date_cursor;
pub mod error;
pub mod espn;
pub mod formatting;
pub mod layout_constants;
pub mod league;
pub mod model;
pub mod sorting;
pub mod team_colors;
pub mod tui;
pub mod view;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;

#[cfg(any(test, feature = "development"))]
pub mod dev;
