//! # analytix
//!
//! Report type resolution and request validation for the YouTube Analytics API.
//!
//! ## Architecture
//!
//! Every API query belongs to exactly one report type: a fixed combination
//! of dimensions, filters, metrics and sort options. analytix picks that
//! report type from the request alone and checks the request against it
//! before anything is sent.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    ReportRequest                         │
//! │  (dimensions, filters, metrics, sort, limit, options)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolver::determine]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Catalog (43 ordered ReportTypes)            │
//! │              first matching signature wins               │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [validation]
//! ┌─────────────────────────────────────────────────────────┐
//! │        &'static ReportType  or  every violation          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [model::report]
//! ┌─────────────────────────────────────────────────────────┐
//! │          Report (parsed API response columns)            │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{catalog, find, CATALOG};
    pub use crate::error::{ResolveError, ResolveResult};
    pub use crate::model::{
        ColumnHeader, ColumnType, DataType, Domain, Report, ReportRequest, ReportType,
    };
    pub use crate::resolver::{determine, resolve, ReportTypeResolver};
    pub use crate::validation::ValidationError;
}

// Also export at crate root for convenience
pub use error::{ResolveError, ResolveResult};
pub use model::{ReportRequest, ReportType};
pub use resolver::{determine, resolve, ReportTypeResolver};
pub use validation::ValidationError;
