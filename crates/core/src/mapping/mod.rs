//! Torrent to arr mapping model and remote service client.
//!
//! A mapping links a torrent's infohash to the arr application that manages
//! it. The remote mapping store owns persistence; this module only speaks
//! its HTTP surface and decodes its wire types.

mod client;
mod types;

pub use client::MappingClient;
pub use types::*;
