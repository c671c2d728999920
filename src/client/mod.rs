//! Space workspace API client
//!
//! The transport lives in [`client`]; the resource endpoints are split per
//! concern the way the server organizes them. Everything here speaks raw
//! wire types; [`convert`] turns them into the domain types the export
//! engine consumes.

pub mod channels;
pub mod client;
pub mod convert;
pub mod documents;
pub mod messages;
pub mod projects;
pub mod types;
pub mod uploads;

pub use client::SpaceClient;
