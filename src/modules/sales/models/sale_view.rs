// Sale filtering and the typed view the report services consume

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sale::SaleRecord;
use crate::core::{AppError, Result};

/// Conjunctive constraints over sales; `None` imposes no restriction.
///
/// Inconsistent combinations (an exact date outside the range) simply
/// select nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleFilter {
    pub exact_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employee_id: Option<i64>,
}

impl SaleFilter {
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a record satisfies every present constraint
    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.exact_date.map_or(true, |d| record.sale_date == d)
            && self.start_date.map_or(true, |d| record.sale_date >= d)
            && self.end_date.map_or(true, |d| record.sale_date <= d)
            && self.employee_id.map_or(true, |id| record.employee.id == id)
    }
}

/// Raw query-string form of a sale filter.
///
/// Empty strings count as absent, mirroring blank form fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleFilterQuery {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl SaleFilterQuery {
    pub fn into_filter(self) -> Result<SaleFilter> {
        Ok(SaleFilter {
            exact_date: parse_date("date", self.date.as_deref())?,
            start_date: parse_date("start", self.start.as_deref())?,
            end_date: parse_date("end", self.end.as_deref())?,
            employee_id: parse_id("employee_id", self.employee_id.as_deref())?,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    present(value)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| {
                AppError::validation(format!(
                    "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                    field, v
                ))
            })
        })
        .transpose()
}

fn parse_id(field: &str, value: Option<&str>) -> Result<Option<i64>> {
    present(value)
        .map(|v| {
            v.parse::<i64>().map_err(|_| {
                AppError::validation(format!("Invalid {}: '{}'. Expected an integer", field, v))
            })
        })
        .transpose()
}

/// Default sale ordering: most recent date first, then most recent id
pub fn default_sale_order(a: &SaleRecord, b: &SaleRecord) -> Ordering {
    b.sale_date.cmp(&a.sale_date).then_with(|| b.id.cmp(&a.id))
}

/// Read-only, eagerly-joined collection of sales in default order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleView {
    records: Vec<SaleRecord>,
}

impl SaleView {
    pub fn new(mut records: Vec<SaleRecord>) -> Self {
        records.sort_by(default_sale_order);
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaleRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a SaleView {
    type Item = &'a SaleRecord;
    type IntoIter = std::slice::Iter<'a, SaleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<SaleRecord> for SaleView {
    fn from_iter<I: IntoIterator<Item = SaleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
