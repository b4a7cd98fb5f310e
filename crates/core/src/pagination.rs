//! Page-based pagination rules.
//!
//! Query strings carry a 1-based `page` and a `per_page` size. Both are
//! validated here, before anything reaches the database, and converted into
//! the `LIMIT` / `OFFSET` pair the repository layer binds.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Parameter names and defaults
// ---------------------------------------------------------------------------

/// Query parameter holding the 1-based page number.
pub const PARAM_PAGE: &str = "page";

/// Query parameter holding the page size.
pub const PARAM_PER_PAGE: &str = "per_page";

/// Page size parameter name used by older clients. Rejected, never aliased.
pub const PARAM_LEGACY_LIMIT: &str = "limit";

/// Page number used when `page` is absent.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `per_page` is absent.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Default ceiling for `per_page`. Deployments may lower or raise it.
pub const DEFAULT_MAX_PER_PAGE: i64 = 100;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Read an integer query parameter.
///
/// Returns `default` when the parameter is absent or empty. A present value
/// that is not a base-10 integer is a validation error naming the parameter;
/// it never falls back to the default.
pub fn parse_int_param(
    params: &HashMap<String, String>,
    name: &str,
    default: i64,
) -> Result<i64, CoreError> {
    match params.get(name).map(String::as_str) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            CoreError::Validation(format!(
                "Query parameter '{name}' must be an integer, got '{raw}'"
            ))
        }),
    }
}

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A validated page request.
///
/// Holding one guarantees `page >= 1`, `1 <= per_page <= max_per_page` and
/// an offset that fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
    offset: i64,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64, max_per_page: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "Query parameter '{PARAM_PAGE}' must be at least 1, got {page}"
            )));
        }
        if per_page < 1 || per_page > max_per_page {
            return Err(CoreError::Validation(format!(
                "Query parameter '{PARAM_PER_PAGE}' must be between 1 and {max_per_page}, got {per_page}"
            )));
        }
        let offset = (page - 1).checked_mul(per_page).ok_or_else(|| {
            CoreError::Validation(format!(
                "Query parameter '{PARAM_PAGE}' is too large, got {page}"
            ))
        })?;

        Ok(Self {
            page,
            per_page,
            offset,
        })
    }

    /// Build a page request from raw query parameters.
    ///
    /// `per_page` is the only accepted size parameter. A request carrying
    /// `limit` is rejected so clients of the old name notice the change
    /// instead of silently getting the default size.
    pub fn from_query(
        params: &HashMap<String, String>,
        max_per_page: i64,
    ) -> Result<Self, CoreError> {
        if params.contains_key(PARAM_LEGACY_LIMIT) {
            return Err(CoreError::Validation(format!(
                "Query parameter '{PARAM_LEGACY_LIMIT}' is not supported, use '{PARAM_PER_PAGE}'"
            )));
        }

        let page = parse_int_param(params, PARAM_PAGE, DEFAULT_PAGE)?;
        let per_page = parse_int_param(params, PARAM_PER_PAGE, DEFAULT_PER_PAGE)?;
        Self::new(page, per_page, max_per_page)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Row limit for the page fetch.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            offset: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PageMeta
// ---------------------------------------------------------------------------

/// Pagination metadata returned next to a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub per_page: i64,
    /// Row count of the whole dataset, not of the returned page.
    pub total: i64,
}

impl PageMeta {
    pub fn new(request: &PageRequest, total: i64) -> Self {
        Self {
            current_page: request.page(),
            per_page: request.per_page(),
            total,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
