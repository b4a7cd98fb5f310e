//! Route tree.
//!
//! ```text
//! /          list titles (paginated)
//! ```

pub mod titles;
