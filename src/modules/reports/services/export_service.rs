// CSV export of sales, employees and cars
//
// Column order is fixed and the header row always comes first. Decimals are
// written through their exact string form, never via floating point.

use crate::core::{AppError, Result};
use crate::modules::cars::models::Car;
use crate::modules::employees::models::Employee;
use crate::modules::sales::models::SaleView;

pub const SALES_CSV_HEADER: [&str; 7] = [
    "id",
    "sale_date",
    "employee",
    "car",
    "actual_sale_price",
    "cost_price",
    "profit",
];

pub const EMPLOYEES_CSV_HEADER: [&str; 5] = ["id", "full_name", "position", "phone", "email"];

pub const CARS_CSV_HEADER: [&str; 6] = [
    "id",
    "manufacturer",
    "year",
    "model",
    "cost_price",
    "potential_sale_price",
];

/// Serializes record collections into in-memory CSV text
pub struct ExportService;

impl ExportService {
    pub fn export_sales_csv(sales: &SaleView) -> Result<String> {
        let mut writer = csv_writer();
        writer.write_record(SALES_CSV_HEADER)?;

        for sale in sales {
            writer.write_record([
                sale.id.to_string(),
                sale.sale_date.format("%Y-%m-%d").to_string(),
                sale.employee.full_name.clone(),
                sale.car.label(),
                sale.actual_sale_price.to_string(),
                sale.car.cost_price.to_string(),
                sale.profit().to_string(),
            ])?;
        }

        finish(writer)
    }

    pub fn export_employees_csv(employees: &[Employee]) -> Result<String> {
        let mut writer = csv_writer();
        writer.write_record(EMPLOYEES_CSV_HEADER)?;

        for employee in employees {
            writer.write_record([
                employee.id.to_string(),
                employee.full_name.clone(),
                employee.position.clone(),
                employee.phone.clone(),
                employee.email.clone(),
            ])?;
        }

        finish(writer)
    }

    pub fn export_cars_csv(cars: &[Car]) -> Result<String> {
        let mut writer = csv_writer();
        writer.write_record(CARS_CSV_HEADER)?;

        for car in cars {
            writer.write_record([
                car.id.to_string(),
                car.manufacturer.clone(),
                car.year.to_string(),
                car.model.clone(),
                car.cost_price.to_string(),
                car.potential_sale_price.to_string(),
            ])?;
        }

        finish(writer)
    }
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("Failed to flush CSV output: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::internal(format!("CSV output is not UTF-8: {}", e)))
}
