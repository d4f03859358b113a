//! Queryable snapshots of ODBC diagnostic records.
//!
//! The ODBC C API hands out diagnostics one record at a time: call
//! `SQLGetDiagRec` with record number 1, then 2, and so on until the driver
//! answers `SQL_NO_DATA`. This crate drains that queue once into an owned,
//! indexable [`Diagnostics`] snapshot, together with the connection-name and
//! server-name diagnostic fields (with the `"None"` / `"Not applicable"`
//! fallbacks when a name is unknowable or meaningless for the handle kind).
//!
//! The collector works against any [`DiagSource`], the seam over the two
//! driver primitives. With the `odbc` cargo feature enabled the crate links
//! the system driver manager and provides [`RawOdbcHandle`], a non-owning
//! wrapper around a raw environment, connection, statement, or descriptor
//! handle; the handle stays the caller's responsibility and must outlive the
//! collector.

mod diagnostics;
#[cfg(feature = "odbc")]
mod ffi;
mod handle;
mod types;

pub use diagnostics::{log_diagnostics, DiagnosticRecord, Diagnostics, NONE, NOT_APPLICABLE};
#[cfg(feature = "odbc")]
pub use handle::RawOdbcHandle;
pub use handle::{DiagSource, HandleKind};
pub use types::*;
