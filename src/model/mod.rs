//! Report types, requests and responses.

pub mod report;
pub mod report_type;
pub mod request;

pub use report::{ColumnHeader, ColumnType, DataType, Report, ReportError};
pub use report_type::{Condition, Domain, FilterValues, ReportKind, ReportType, ValueFormat};
pub use request::{ReportRequest, SortKey};
