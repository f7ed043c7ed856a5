//! HTTP JSON API for running shortest path queries on uploaded graphs

pub mod api;
pub mod models;
pub mod server;

pub use server::{start_server, ServerConfig};
