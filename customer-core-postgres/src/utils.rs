use customer_core_api::error::{CustomerError, CustomerResult};
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::str::FromStr;

use crate::error::translate;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> CustomerResult<Self>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> CustomerResult<HeaplessString<N>> {
    let s: String = row.try_get(col_name).map_err(translate)?;
    HeaplessString::from_str(&s).map_err(|_| too_long(col_name, N))
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> CustomerResult<Option<HeaplessString<N>>> {
    let s: Option<String> = row.try_get(col_name).map_err(translate)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| too_long(col_name, N))
}

fn too_long(col_name: &str, max: usize) -> CustomerError {
    CustomerError::Internal(format!(
        "Value for column '{col_name}' is too long (max {max} bytes)"
    ))
}

/// Converts a page bound to the `BIGINT` Postgres expects for `LIMIT`/`OFFSET`.
pub fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
