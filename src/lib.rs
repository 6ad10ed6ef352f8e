#![warn(rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod sink;

pub use healthcheck::{healthcheck, healthcheck_with_port};
