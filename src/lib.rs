//! Terminal chat client speaking a newline-delimited, one-byte-tagged
//! text protocol over TCP.
//!
//! Each module focuses on a concrete responsibility:
//!
//! - [`cli`] parses the command-line interface (server endpoint and the
//!   reserved command prefix).
//! - [`username`] validates and prompts for the username before anything
//!   touches the network.
//! - [`connection`] resolves and connects to the server, yielding split
//!   read/write halves.
//! - [`wire`] provides the tagged line protocol plus helpers for async
//!   reads and writes.
//! - [`command`] parses local `/`-prefixed commands.
//! - [`client`] runs the session, multiplexing stdin and server lines
//!   for a terminal user.
//!
//! Integration tests spawn the binary against an in-process fake server
//! to exercise the full session.

pub mod cli;
pub mod client;
pub mod command;
pub mod connection;
pub mod username;
pub mod wire;
