//! Folio catalog server library.
//!
//! Read-only browser for a catalog of collectible book editions:
//! authors, works, editions, series, publishers, and photos. The
//! library exposes the full module tree so integration tests can
//! exercise the aggregation layer; the `folio` binary is the server
//! entry point.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
