//! Core library for the `forecast-dash` CLI.
//!
//! This crate provides the building blocks used by the binary: request
//! construction and bounds checking, the HTTP client for the prediction
//! service, the request orchestrator and its published state, chart geometry
//! with its SVG and table renderers, and the terminal dashboard. The primary
//! user-facing interface is the `forecast-dash` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod plot;
pub mod ui;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
