// CSV export shape: one header row, one row per record, fixed column order

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;

use dealership::cars::Car;
use dealership::employees::Employee;
use dealership::reports::services::{CARS_CSV_HEADER, EMPLOYEES_CSV_HEADER, SALES_CSV_HEADER};
use dealership::reports::ExportService;
use dealership::sales::{SaleRecord, SaleView};

fn john() -> Employee {
    let now = Utc::now();
    Employee {
        id: 1,
        full_name: "John Doe".to_string(),
        position: "Sales".to_string(),
        phone: "+48123456789".to_string(),
        email: "john@example.com".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn corolla() -> Car {
    let now = Utc::now();
    Car {
        id: 2,
        manufacturer: "Toyota".to_string(),
        year: 2020,
        model: "Corolla".to_string(),
        cost_price: dec!(10000.00),
        potential_sale_price: dec!(13000.00),
        created_at: now,
        updated_at: now,
    }
}

fn sale(id: i64, day: u32) -> SaleRecord {
    let now = Utc::now();
    SaleRecord {
        id,
        sale_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        actual_sale_price: dec!(12500.00),
        employee: john(),
        car: corolla(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_single_sale_export_has_two_lines() {
    let view = SaleView::new(vec![sale(1, 1)]);
    let csv = ExportService::export_sales_csv(&view).unwrap();

    assert_eq!(
        csv,
        "id,sale_date,employee,car,actual_sale_price,cost_price,profit\r\n\
         1,2024-01-01,John Doe,Toyota Corolla (2020),12500.00,10000.00,2500.00\r\n"
    );
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn test_row_count_matches_view() {
    let view = SaleView::new((1..=5).map(|id| sale(id, id as u32)).collect());
    let csv = ExportService::export_sales_csv(&view).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), SALES_CSV_HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), view.len());

    // Rows keep the view order: newest first
    assert_eq!(&rows[0][0], "5");
    assert_eq!(&rows[4][0], "1");
}

#[test]
fn test_employee_and_car_columns() {
    let employees = ExportService::export_employees_csv(&[john()]).unwrap();
    let mut reader = csv::Reader::from_reader(employees.as_bytes());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        EMPLOYEES_CSV_HEADER.to_vec()
    );
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(
        row.iter().collect::<Vec<_>>(),
        vec!["1", "John Doe", "Sales", "+48123456789", "john@example.com"]
    );

    let cars = ExportService::export_cars_csv(&[corolla()]).unwrap();
    let mut reader = csv::Reader::from_reader(cars.as_bytes());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        CARS_CSV_HEADER.to_vec()
    );
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(
        row.iter().collect::<Vec<_>>(),
        vec!["2", "Toyota", "2020", "Corolla", "10000.00", "13000.00"]
    );
}

#[test]
fn test_decimals_keep_exact_digits() {
    let mut record = sale(1, 1);
    record.actual_sale_price = dec!(10000.10);
    record.car.cost_price = dec!(9999.99);

    let csv = ExportService::export_sales_csv(&SaleView::new(vec![record])).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.ends_with(",10000.10,9999.99,0.11"));
}
