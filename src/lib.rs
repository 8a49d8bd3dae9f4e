//! Reflector - Single-Connection Echo HTTP Server
//!
//! Core library for request parsing, response generation and the
//! per-connection lifecycle policy.

pub mod config;
pub mod http;
pub mod server;
