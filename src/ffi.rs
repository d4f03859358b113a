//! Raw driver-manager entry points, available with the `odbc` feature.

#![allow(non_snake_case)]

use crate::types::*;

#[cfg_attr(windows, link(name = "odbc32"))]
#[cfg_attr(not(windows), link(name = "odbc"))]
extern "system" {
    pub fn SQLGetDiagRec(
        handle_type: SQLSMALLINT,
        handle: SQLHANDLE,
        rec_number: SQLSMALLINT,
        sql_state: *mut SQLCHAR,
        native_error: *mut SQLINTEGER,
        message_text: *mut SQLCHAR,
        buffer_length: SQLSMALLINT,
        text_length: *mut SQLSMALLINT,
    ) -> SQLRETURN;

    pub fn SQLGetDiagField(
        handle_type: SQLSMALLINT,
        handle: SQLHANDLE,
        rec_number: SQLSMALLINT,
        diag_identifier: SQLSMALLINT,
        diag_info: SQLPOINTER,
        buffer_length: SQLSMALLINT,
        string_length: *mut SQLSMALLINT,
    ) -> SQLRETURN;
}
