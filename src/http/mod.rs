//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x handler: every request is answered with a
//! fixed-shape HTML page echoing the request target and the peer address.
//!
//! # Architecture
//!
//! - **`connection`**: per-socket handler implementing the request-response
//!   state machine and the keep-alive/idle-timeout lifecycle policy
//! - **`parser`**: turns one raw text request into an [`message::HttpMessage`]
//! - **`message`**: the parsed request representation and connection-policy
//!   accessors
//! - **`response`**: builds the echo response (or the 404 line) as text
//! - **`writer`**: writes an assembled response to the client
//!
//! # Connection State Machine
//!
//! Each accepted connection cycles through:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for one request (bounded by idle timeout)
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Generate the echo response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```
//!
//! A read timeout, EOF, or malformed input short-circuits straight to
//! `Closed` without writing anything.

pub mod message;
pub mod parser;
pub mod response;
pub mod connection;
pub mod writer;
