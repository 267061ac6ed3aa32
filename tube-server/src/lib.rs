//! Tube journey planner server.
//!
//! A web application that lets you pick two London Underground stations
//! and shows the TfL-proposed journey between them: when it leaves, how
//! long it takes, what it costs, and a diagram of the lines you ride.

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod presenter;
pub mod tfl;
pub mod web;
