//! Column allow-list machinery for dynamic update statements
//!
//! Partial updates arrive as free-form JSON objects. Each entity declares a
//! [`ColumnSet`]: the fixed list of updatable columns together with the
//! storage type each one binds as. The payload is filtered through that set
//! before any SQL is assembled, so a caller can never write a column that is
//! not declared here. Unknown keys are dropped silently, not rejected.
//!
//! Column names pushed into SQL text come only from the static allow-list;
//! caller-supplied values are always bound as parameters.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Storage type of an updatable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Date,
}

/// A value converted from the JSON payload, typed for binding.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Date(Option<NaiveDate>),
}

/// Result of a dynamic update.
///
/// `Noop` means nothing survived the allow-list filter and no statement was
/// issued; `Applied(0)` means a statement ran but matched no row. The two are
/// distinct: a no-op is not a failure, while `Applied(0)` is how "not found"
/// surfaces from an UPDATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Noop,
    Applied(u64),
}

/// The declared schema map for one entity's updatable columns.
pub struct ColumnSet {
    pub table: &'static str,
    pub columns: &'static [(&'static str, ColumnType)],
}

impl ColumnSet {
    /// Filter a JSON payload down to allow-listed columns, converting each
    /// surviving value to its declared storage type.
    ///
    /// Assignments come back in allow-list order, so the generated statement
    /// shape does not depend on payload key order.
    pub fn filter(&self, payload: &Map<String, Value>) -> Result<Vec<(&'static str, SqlValue)>> {
        let mut assignments = Vec::new();
        for (column, column_type) in self.columns {
            let Some(value) = payload.get(*column) else {
                continue;
            };
            assignments.push((*column, convert(column, *column_type, value)?));
        }
        Ok(assignments)
    }

    /// Build a single parameterized UPDATE statement for the columns that
    /// survive filtering, or `None` when nothing survives.
    pub fn update_query(
        &self,
        id: Uuid,
        payload: &Map<String, Value>,
    ) -> Result<Option<QueryBuilder<'static, Postgres>>> {
        let assignments = self.filter(payload)?;
        if assignments.is_empty() {
            return Ok(None);
        }

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", self.table));
        {
            let mut fields = builder.separated(", ");
            for (column, value) in assignments {
                fields.push(format!("{} = ", column));
                match value {
                    SqlValue::Text(v) => fields.push_bind_unseparated(v),
                    SqlValue::Date(v) => fields.push_bind_unseparated(v),
                };
            }
            fields.push("updated_at = NOW()");
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        Ok(Some(builder))
    }
}

fn convert(column: &str, column_type: ColumnType, value: &Value) -> Result<SqlValue> {
    match column_type {
        ColumnType::Text => match value {
            Value::Null => Ok(SqlValue::Text(None)),
            Value::String(s) => Ok(SqlValue::Text(Some(s.clone()))),
            _ => Err(Error::Validation(format!(
                "Field '{}' must be a string",
                column
            ))),
        },
        ColumnType::Date => match value {
            Value::Null => Ok(SqlValue::Date(None)),
            Value::String(s) => {
                let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                    Error::Validation(format!(
                        "Field '{}' must be an ISO date (YYYY-MM-DD)",
                        column
                    ))
                })?;
                Ok(SqlValue::Date(Some(date)))
            }
            _ => Err(Error::Validation(format!(
                "Field '{}' must be an ISO date string",
                column
            ))),
        },
    }
}
