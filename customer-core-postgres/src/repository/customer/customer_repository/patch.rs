//! Builds the sparse `UPDATE` for a customer patch.
//!
//! Column names come from a closed enum and are never taken from input.

use customer_core_api::domain::CustomerPatch;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use super::repo_impl::CUSTOMER_COLUMNS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CustomerColumn {
    Name,
    Email,
    Phone,
}

impl CustomerColumn {
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            CustomerColumn::Name => "name",
            CustomerColumn::Email => "email",
            CustomerColumn::Phone => "phone",
        }
    }
}

/// Present fields of `patch`, in column order
pub(super) fn assignments(patch: &CustomerPatch) -> Vec<(CustomerColumn, String)> {
    [
        (CustomerColumn::Name, &patch.name),
        (CustomerColumn::Email, &patch.email),
        (CustomerColumn::Phone, &patch.phone),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.clone().map(|value| (column, value)))
    .collect()
}

/// `None` when the patch carries nothing to write
pub(super) fn build_update(id: Uuid, patch: &CustomerPatch) -> Option<QueryBuilder<'static, Postgres>> {
    let assignments = assignments(patch);
    if assignments.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("WITH updated AS (UPDATE customers SET ");
    let mut set = builder.separated(", ");
    for (column, value) in assignments {
        set.push(column.as_str());
        set.push_unseparated(" = ");
        set.push_bind_unseparated(value);
    }
    set.push("updated_at = now()");

    builder
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" AND deleted_at IS NULL RETURNING id, name, email, phone, created_at, updated_at)");
    builder.push(format!(
        " SELECT {CUSTOMER_COLUMNS} FROM updated c LEFT JOIN verifications v ON v.customer_id = c.id"
    ));

    Some(builder)
}
