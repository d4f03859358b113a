//! ODBC ABI scalar types and the constants the diagnostics API deals in.

use std::ffi::c_void;

pub type SQLRETURN = i16;
pub type SQLSMALLINT = i16;
pub type SQLINTEGER = i32;
pub type SQLCHAR = u8;
pub type SQLHANDLE = *mut c_void;
pub type SQLPOINTER = *mut c_void;

// ── Return codes ────────────────────────────────────────────────────

pub const SQL_SUCCESS: SQLRETURN = 0;
pub const SQL_SUCCESS_WITH_INFO: SQLRETURN = 1;
pub const SQL_NO_DATA: SQLRETURN = 100;
pub const SQL_ERROR: SQLRETURN = -1;
pub const SQL_INVALID_HANDLE: SQLRETURN = -2;

// ── Handle type tags ────────────────────────────────────────────────

pub const SQL_HANDLE_ENV: SQLSMALLINT = 1;
pub const SQL_HANDLE_DBC: SQLSMALLINT = 2;
pub const SQL_HANDLE_STMT: SQLSMALLINT = 3;
pub const SQL_HANDLE_DESC: SQLSMALLINT = 4;

// ── SQLGetDiagField record field identifiers ────────────────────────

pub const SQL_DIAG_CONNECTION_NAME: SQLSMALLINT = 10;
pub const SQL_DIAG_SERVER_NAME: SQLSMALLINT = 11;

// ── Buffer capacities (sqlext.h maxima, plus NUL terminator) ────────

pub const SQL_SQLSTATE_SIZE: usize = 5;
pub const SQL_STATE_SIZE: usize = SQL_SQLSTATE_SIZE + 1;
pub const SQL_MAX_MESSAGE_LENGTH: usize = 512;
pub const SQL_MESSAGE_LENGTH: usize = SQL_MAX_MESSAGE_LENGTH + 1;
pub const SQL_NAME_LENGTH: usize = 128;

/// Equivalent of the `SQL_SUCCEEDED` macro. Its negation is how the
/// record-enumeration loop terminates: `SQL_NO_DATA` past the last record
/// counts as failure just like `SQL_ERROR` or `SQL_INVALID_HANDLE`.
pub fn succeeded(rc: SQLRETURN) -> bool {
    rc == SQL_SUCCESS || rc == SQL_SUCCESS_WITH_INFO
}
