//! Domain types for the catalog service.
//!
//! This crate has no I/O: it holds the pagination rules shared by the
//! repository layer and the HTTP layer.

pub mod error;
pub mod pagination;
pub mod types;
