//! Presentation logic of a GitHub client.
//!
//! Screens turn gesture streams into display-state and navigation streams
//! (see [`presentation::Transform`]). The shared pieces are the busy
//! trackers and failure broadcaster in [`activity`], the error translator
//! in [`error`], and the paginated list engine in [`presentation::list`].

pub mod activity;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod screens;
pub mod teardown;
