// Portable JSON dump of every dealership record
//
// Each entry is `{"model": ..., "pk": ..., "fields": {...}}`. Employees come
// first, then cars, then sales, so a loader can insert in file order without
// tripping the foreign keys.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{validate_money, AppError, Result};
use crate::modules::cars::models::{Car, CarInput};
use crate::modules::employees::models::{Employee, EmployeeInput};
use crate::modules::sales::models::Sale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureModel {
    #[serde(rename = "dealership.employee")]
    Employee,
    #[serde(rename = "dealership.car")]
    Car,
    #[serde(rename = "dealership.sale")]
    Sale,
}

/// One record in a dump file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureEntry {
    pub model: FixtureModel,
    pub pk: i64,
    pub fields: serde_json::Value,
}

/// Sale columns as they appear in a dump; references are plain primary keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleFields {
    pub employee: i64,
    pub car: i64,
    pub sale_date: NaiveDate,
    pub actual_sale_price: Decimal,
}

impl From<&Sale> for SaleFields {
    fn from(sale: &Sale) -> Self {
        Self {
            employee: sale.employee_id,
            car: sale.car_id,
            sale_date: sale.sale_date,
            actual_sale_price: sale.actual_sale_price,
        }
    }
}

/// Record with its primary key kept alongside the writable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    pub pk: i64,
    pub fields: T,
}

impl<T> Keyed<T> {
    pub fn new(pk: i64, fields: T) -> Self {
        Self { pk, fields }
    }
}

/// Every employee, car and sale, keyed by primary key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSnapshot {
    pub employees: Vec<Keyed<EmployeeInput>>,
    pub cars: Vec<Keyed<CarInput>>,
    pub sales: Vec<Keyed<SaleFields>>,
}

impl DataSnapshot {
    pub fn from_records(employees: &[Employee], cars: &[Car], sales: &[Sale]) -> Self {
        Self {
            employees: employees
                .iter()
                .map(|e| {
                    Keyed::new(
                        e.id,
                        EmployeeInput {
                            full_name: e.full_name.clone(),
                            position: e.position.clone(),
                            phone: e.phone.clone(),
                            email: e.email.clone(),
                        },
                    )
                })
                .collect(),
            cars: cars
                .iter()
                .map(|c| {
                    Keyed::new(
                        c.id,
                        CarInput {
                            manufacturer: c.manufacturer.clone(),
                            year: c.year,
                            model: c.model.clone(),
                            cost_price: c.cost_price,
                            potential_sale_price: c.potential_sale_price,
                        },
                    )
                })
                .collect(),
            sales: sales
                .iter()
                .map(|s| Keyed::new(s.id, SaleFields::from(s)))
                .collect(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.employees.len() + self.cars.len() + self.sales.len()
    }

    /// Flatten into dump entries, employees then cars then sales
    pub fn to_fixture(&self) -> Result<Vec<FixtureEntry>> {
        let mut entries = Vec::with_capacity(self.record_count());

        for employee in &self.employees {
            entries.push(FixtureEntry {
                model: FixtureModel::Employee,
                pk: employee.pk,
                fields: serde_json::to_value(&employee.fields)?,
            });
        }
        for car in &self.cars {
            entries.push(FixtureEntry {
                model: FixtureModel::Car,
                pk: car.pk,
                fields: serde_json::to_value(&car.fields)?,
            });
        }
        for sale in &self.sales {
            entries.push(FixtureEntry {
                model: FixtureModel::Sale,
                pk: sale.pk,
                fields: serde_json::to_value(&sale.fields)?,
            });
        }

        Ok(entries)
    }

    /// Parse and validate dump entries in any order
    pub fn from_fixture(entries: Vec<FixtureEntry>) -> Result<Self> {
        let mut snapshot = Self::default();

        for entry in entries {
            if entry.pk <= 0 {
                return Err(AppError::validation(format!(
                    "{:?} record has invalid pk {}",
                    entry.model, entry.pk
                )));
            }

            match entry.model {
                FixtureModel::Employee => {
                    let fields: EmployeeInput = serde_json::from_value(entry.fields)?;
                    snapshot
                        .employees
                        .push(Keyed::new(entry.pk, fields.into_validated()?));
                }
                FixtureModel::Car => {
                    let fields: CarInput = serde_json::from_value(entry.fields)?;
                    snapshot
                        .cars
                        .push(Keyed::new(entry.pk, fields.into_validated()?));
                }
                FixtureModel::Sale => {
                    let fields: SaleFields = serde_json::from_value(entry.fields)?;
                    validate_money("actual_sale_price", fields.actual_sale_price)?;
                    snapshot.sales.push(Keyed::new(entry.pk, fields));
                }
            }
        }

        Ok(snapshot)
    }
}
