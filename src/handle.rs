use crate::types::*;

/// The kind of ODBC handle a diagnostic source wraps. One enum rather than
/// one type per handle kind, so the enumeration loop exists (and is tested)
/// exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Environment,
    Connection,
    Statement,
    Descriptor,
}

impl HandleKind {
    /// The `SQL_HANDLE_*` tag passed to the driver manager.
    pub fn tag(self) -> SQLSMALLINT {
        match self {
            HandleKind::Environment => SQL_HANDLE_ENV,
            HandleKind::Connection => SQL_HANDLE_DBC,
            HandleKind::Statement => SQL_HANDLE_STMT,
            HandleKind::Descriptor => SQL_HANDLE_DESC,
        }
    }
}

/// A source of diagnostic records: the two driver primitives the collector
/// enumerates with.
///
/// Both methods follow the C API's buffer contract: output longer than the
/// buffer is truncated to `buf.len() - 1` bytes, the output is NUL
/// terminated, and the full untruncated length is reported through the
/// length out-parameter. `diag_rec` must answer a non-success code (normally
/// `SQL_NO_DATA`) for the first record number past the last available
/// record; `sql_state` must hold at least [`SQL_STATE_SIZE`] bytes.
pub trait DiagSource {
    fn kind(&self) -> HandleKind;

    /// `SQLGetDiagRec`: one record of the handle's diagnostic queue,
    /// `rec_number` counting from 1.
    fn diag_rec(
        &self,
        rec_number: SQLSMALLINT,
        sql_state: &mut [SQLCHAR],
        native_error: &mut SQLINTEGER,
        message: &mut [SQLCHAR],
        text_length: &mut SQLSMALLINT,
    ) -> SQLRETURN;

    /// `SQLGetDiagField` restricted to string-valued record fields
    /// (connection name, server name).
    fn diag_field(
        &self,
        rec_number: SQLSMALLINT,
        field: SQLSMALLINT,
        value: &mut [SQLCHAR],
        string_length: &mut SQLSMALLINT,
    ) -> SQLRETURN;
}

/// A borrowed raw driver-manager handle.
///
/// The wrapper never allocates or frees the handle; it only reads its
/// diagnostic queue, which the standard specifies as non-destructive.
#[cfg(feature = "odbc")]
pub struct RawOdbcHandle {
    kind: HandleKind,
    handle: SQLHANDLE,
}

#[cfg(feature = "odbc")]
impl RawOdbcHandle {
    /// # Safety
    ///
    /// `handle` must be a valid, allocated ODBC handle of kind `kind`, and
    /// must remain valid for the lifetime of the wrapper and of any
    /// collector borrowing it.
    pub unsafe fn new(kind: HandleKind, handle: SQLHANDLE) -> Self {
        RawOdbcHandle { kind, handle }
    }
}

#[cfg(feature = "odbc")]
impl DiagSource for RawOdbcHandle {
    fn kind(&self) -> HandleKind {
        self.kind
    }

    fn diag_rec(
        &self,
        rec_number: SQLSMALLINT,
        sql_state: &mut [SQLCHAR],
        native_error: &mut SQLINTEGER,
        message: &mut [SQLCHAR],
        text_length: &mut SQLSMALLINT,
    ) -> SQLRETURN {
        unsafe {
            crate::ffi::SQLGetDiagRec(
                self.kind.tag(),
                self.handle,
                rec_number,
                sql_state.as_mut_ptr(),
                native_error,
                message.as_mut_ptr(),
                message.len() as SQLSMALLINT,
                text_length,
            )
        }
    }

    fn diag_field(
        &self,
        rec_number: SQLSMALLINT,
        field: SQLSMALLINT,
        value: &mut [SQLCHAR],
        string_length: &mut SQLSMALLINT,
    ) -> SQLRETURN {
        unsafe {
            crate::ffi::SQLGetDiagField(
                self.kind.tag(),
                self.handle,
                rec_number,
                field,
                value.as_mut_ptr() as SQLPOINTER,
                value.len() as SQLSMALLINT,
                string_length,
            )
        }
    }
}
