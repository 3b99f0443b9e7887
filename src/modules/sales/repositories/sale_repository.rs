// Sale persistence and the joined, filtered sale query
//
// `filter` is the single query behind every report: one SELECT joining
// employees and cars so downstream code never looks them up again.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use crate::core::traits::Repository;
use crate::core::{AppError, AppResult};
use crate::modules::cars::models::Car;
use crate::modules::employees::models::Employee;
use crate::modules::sales::models::{NewSale, Sale, SaleFilter, SaleRecord, SaleView};

/// Repository for sales, including the joined read path
#[async_trait]
pub trait SaleRepository: Repository<Sale, NewSale, i64> {
    /// Joined sales matching every present constraint, newest first
    async fn filter(&self, filter: &SaleFilter) -> AppResult<SaleView>;

    /// A single joined sale
    async fn find_record(&self, id: i64) -> AppResult<Option<SaleRecord>>;
}

const SALE_RECORD_SELECT: &str = r#"
    SELECT
        s.id AS sale_id, s.sale_date, s.actual_sale_price,
        s.created_at AS sale_created_at, s.updated_at AS sale_updated_at,
        e.id AS employee_id, e.full_name AS employee_full_name,
        e.position AS employee_position, e.phone AS employee_phone,
        e.email AS employee_email, e.created_at AS employee_created_at,
        e.updated_at AS employee_updated_at,
        c.id AS car_id, c.manufacturer AS car_manufacturer, c.year AS car_year,
        c.model AS car_model, c.cost_price AS car_cost_price,
        c.potential_sale_price AS car_potential_sale_price,
        c.created_at AS car_created_at, c.updated_at AS car_updated_at
    FROM sales s
    INNER JOIN employees e ON e.id = s.employee_id
    INNER JOIN cars c ON c.id = s.car_id
"#;

/// Flat row produced by `SALE_RECORD_SELECT`
#[derive(Debug, FromRow)]
struct SaleRecordRow {
    sale_id: i64,
    sale_date: NaiveDate,
    actual_sale_price: Decimal,
    sale_created_at: DateTime<Utc>,
    sale_updated_at: DateTime<Utc>,
    employee_id: i64,
    employee_full_name: String,
    employee_position: String,
    employee_phone: String,
    employee_email: String,
    employee_created_at: DateTime<Utc>,
    employee_updated_at: DateTime<Utc>,
    car_id: i64,
    car_manufacturer: String,
    car_year: i32,
    car_model: String,
    car_cost_price: Decimal,
    car_potential_sale_price: Decimal,
    car_created_at: DateTime<Utc>,
    car_updated_at: DateTime<Utc>,
}

impl From<SaleRecordRow> for SaleRecord {
    fn from(row: SaleRecordRow) -> Self {
        Self {
            id: row.sale_id,
            sale_date: row.sale_date,
            actual_sale_price: row.actual_sale_price,
            employee: Employee {
                id: row.employee_id,
                full_name: row.employee_full_name,
                position: row.employee_position,
                phone: row.employee_phone,
                email: row.employee_email,
                created_at: row.employee_created_at,
                updated_at: row.employee_updated_at,
            },
            car: Car {
                id: row.car_id,
                manufacturer: row.car_manufacturer,
                year: row.car_year,
                model: row.car_model,
                cost_price: row.car_cost_price,
                potential_sale_price: row.car_potential_sale_price,
                created_at: row.car_created_at,
                updated_at: row.car_updated_at,
            },
            created_at: row.sale_created_at,
            updated_at: row.sale_updated_at,
        }
    }
}

/// Append the WHERE clause for a filter to a query starting with `SALE_RECORD_SELECT`
fn push_filter(query: &mut QueryBuilder<'_, MySql>, filter: &SaleFilter) {
    query.push(" WHERE 1 = 1");

    if let Some(exact) = filter.exact_date {
        query.push(" AND s.sale_date = ").push_bind(exact);
    }
    if let Some(start) = filter.start_date {
        query.push(" AND s.sale_date >= ").push_bind(start);
    }
    if let Some(end) = filter.end_date {
        query.push(" AND s.sale_date <= ").push_bind(end);
    }
    if let Some(employee_id) = filter.employee_id {
        query.push(" AND s.employee_id = ").push_bind(employee_id);
    }
}

pub struct MySqlSaleRepository {
    pool: MySqlPool,
}

impl MySqlSaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for MySqlSaleRepository {
    async fn filter(&self, filter: &SaleFilter) -> AppResult<SaleView> {
        let mut query = QueryBuilder::<MySql>::new(SALE_RECORD_SELECT);
        push_filter(&mut query, filter);
        query.push(" ORDER BY s.sale_date DESC, s.id DESC");

        let rows = query
            .build_query_as::<SaleRecordRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(SaleView::new(rows.into_iter().map(SaleRecord::from).collect()))
    }

    async fn find_record(&self, id: i64) -> AppResult<Option<SaleRecord>> {
        let mut query = QueryBuilder::<MySql>::new(SALE_RECORD_SELECT);
        query.push(" WHERE s.id = ").push_bind(id);

        let row = query
            .build_query_as::<SaleRecordRow>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(SaleRecord::from))
    }
}

#[async_trait]
impl Repository<Sale, NewSale, i64> for MySqlSaleRepository {
    async fn create(&self, input: &NewSale) -> AppResult<Sale> {
        let result = sqlx::query(
            r#"
            INSERT INTO sales (employee_id, car_id, sale_date, actual_sale_price)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(input.employee_id)
        .bind(input.car_id)
        .bind(input.sale_date)
        .bind(input.actual_sale_price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, "Sale references a missing employee or car")
        })?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Sale {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, employee_id, car_id, sale_date, actual_sale_price, created_at, updated_at
            FROM sales
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    async fn update(&self, id: i64, input: &NewSale) -> AppResult<Option<Sale>> {
        sqlx::query(
            r#"
            UPDATE sales
            SET employee_id = ?, car_id = ?, sale_date = ?, actual_sale_price = ?
            WHERE id = ?
            "#,
        )
        .bind(input.employee_id)
        .bind(input.car_id)
        .bind(input.sale_date)
        .bind(input.actual_sale_price)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, "Sale references a missing employee or car")
        })?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AppResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, employee_id, car_id, sale_date, actual_sale_price, created_at, updated_at
            FROM sales
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}
