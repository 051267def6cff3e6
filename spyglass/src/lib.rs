//! # Spyglass
//!
//! A server plugin library for remotely opening and editing players'
//! inventories, online or offline.
//!
//! The heavy lifting lives in `spyglass-core` (the unified virtual
//! container) and `spyglass-registry` (the item model); this crate is the
//! plugin surface: the open-session service, offline data storage, and
//! engine version adapter selection. Host-side glue implements
//! [`version::HolderAdapter`] once per supported engine version and drives
//! everything through [`api::Spyglass`].

pub mod api;
pub mod storage;
pub mod version;

/// The plugin name reported to hosts.
pub const PLUGIN_NAME: &str = "Spyglass";

/// The plugin version reported to hosts.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
