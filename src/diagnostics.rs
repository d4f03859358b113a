use crate::handle::DiagSource;
use crate::types::*;
use log::{debug, warn};
use std::fmt;
use std::slice;

/// Name value when the field call itself fails, i.e. no connection has been
/// established yet.
pub const NONE: &str = "None";
/// Name value when the field is meaningless for the handle kind, e.g. a
/// connection name queried on an environment handle.
pub const NOT_APPLICABLE: &str = "Not applicable";

/// One entry of a handle's diagnostic queue, copied out of the driver's
/// fixed-size buffers into owned strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// 5-char SQLSTATE e.g. "HY000"
    pub state: String,
    pub message: String,
    pub native_error: SQLINTEGER,
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state: {}, native error: {}, message: {}",
            self.state, self.native_error, self.message
        )
    }
}

/// A snapshot of the diagnostic queue of an ODBC handle.
///
/// Construction drains the queue once; [`Diagnostics::refresh`] re-drains it
/// on demand, fully replacing the previous snapshot. The collector borrows
/// the source and never owns the underlying handle, so it must not outlive
/// it. Every call into the source is synchronous and in-line; no locking is
/// added on top of whatever thread-safety the driver provides.
pub struct Diagnostics<'h, S: DiagSource> {
    source: &'h S,
    connection_name: String,
    server_name: String,
    records: Vec<DiagnosticRecord>,
}

impl<'h, S: DiagSource> Diagnostics<'h, S> {
    /// Binds to `source` and performs an initial [`Diagnostics::refresh`].
    pub fn new(source: &'h S) -> Self {
        let mut diag = Diagnostics {
            source,
            connection_name: NOT_APPLICABLE.to_string(),
            server_name: NOT_APPLICABLE.to_string(),
            records: Vec::new(),
        };
        diag.refresh();
        diag
    }

    /// Re-reads the handle's diagnostic queue from scratch.
    ///
    /// Enumerates records from number 1 upward until the driver answers a
    /// non-success code; that answer is the normal terminator, never an
    /// error. Connection and server name are fetched once, while record 1 is
    /// in hand, and start each refresh back at [`NOT_APPLICABLE`] so a
    /// refresh that collects zero records does not leave names from an
    /// earlier queue behind.
    pub fn refresh(&mut self) -> &mut Self {
        self.reset();
        self.connection_name = NOT_APPLICABLE.to_string();
        self.server_name = NOT_APPLICABLE.to_string();

        let mut state = [0 as SQLCHAR; SQL_STATE_SIZE];
        let mut message = [0 as SQLCHAR; SQL_MESSAGE_LENGTH];
        let mut native_error: SQLINTEGER = 0;
        let mut text_length: SQLSMALLINT = 0;

        let mut rec: SQLSMALLINT = 1;
        while succeeded(self.source.diag_rec(
            rec,
            &mut state,
            &mut native_error,
            &mut message,
            &mut text_length,
        )) {
            if rec == 1 {
                self.connection_name = self.name_field(SQL_DIAG_CONNECTION_NAME);
                self.server_name = self.name_field(SQL_DIAG_SERVER_NAME);
            }

            let record = DiagnosticRecord {
                state: until_nul(&state),
                message: until_nul(&message),
                native_error,
            };
            debug!(
                "diagnostic record {} on {:?} handle: {}",
                rec,
                self.source.kind(),
                record
            );
            self.records.push(record);

            state = [0; SQL_STATE_SIZE];
            message = [0; SQL_MESSAGE_LENGTH];
            native_error = 0;
            rec += 1;
        }

        self
    }

    /// Clears the captured record sequence.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// SQLSTATE of the record at `index`.
    ///
    /// Panics if `index >= count()`; querying past the snapshot is a caller
    /// bug, not a runtime condition.
    pub fn sql_state(&self, index: usize) -> &str {
        &self.record(index).state
    }

    /// Message text of the record at `index`. Panics if `index >= count()`.
    pub fn message(&self, index: usize) -> &str {
        &self.record(index).message
    }

    /// Driver-specific error code of the record at `index`. Panics if
    /// `index >= count()`.
    pub fn native_error(&self, index: usize) -> SQLINTEGER {
        self.record(index).native_error
    }

    /// The connection name reported alongside the first record, or [`NONE`]
    /// when the driver could not answer, or [`NOT_APPLICABLE`] when the
    /// field has no meaning for this handle kind.
    pub fn connection_name(&self) -> &str {
        &self.connection_name
    }

    /// The server name, with the same fallbacks as
    /// [`Diagnostics::connection_name`].
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Number of records captured by the most recent refresh.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The captured records, in driver-reported order.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, DiagnosticRecord> {
        self.records.iter()
    }

    fn record(&self, index: usize) -> &DiagnosticRecord {
        assert!(
            index < self.records.len(),
            "diagnostic record index {} out of range ({} records captured)",
            index,
            self.records.len()
        );
        &self.records[index]
    }

    // Failure here means the connection has not been established yet; an
    // empty answer means the field does not apply to this handle kind.
    fn name_field(&self, field: SQLSMALLINT) -> String {
        let mut buf = [0 as SQLCHAR; SQL_NAME_LENGTH];
        let mut len: SQLSMALLINT = 0;
        if !succeeded(self.source.diag_field(1, field, &mut buf, &mut len)) {
            NONE.to_string()
        } else if buf[0] == 0 {
            NOT_APPLICABLE.to_string()
        } else {
            until_nul(&buf)
        }
    }
}

impl<'a, 'h, S: DiagSource> IntoIterator for &'a Diagnostics<'h, S> {
    type Item = &'a DiagnosticRecord;
    type IntoIter = slice::Iter<'a, DiagnosticRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drains the diagnostic queue of `source` and emits each record as a
/// warning.
pub fn log_diagnostics(source: &impl DiagSource) {
    for record in &Diagnostics::new(source) {
        warn!("{}", record);
    }
}

fn until_nul(buf: &[SQLCHAR]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
