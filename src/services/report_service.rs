use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{
    error::AppResult,
    models::{SalesReport, SalesSummary, TopProduct},
    state::AppState,
};

pub const TOP_PRODUCTS_LIMIT: u64 = 5;

const SALES_SUMMARY_SQL: &str = r#"
    SELECT
        COUNT(DISTINCT pur.purchase_id) AS total_orders,
        COUNT(DISTINCT pur.customer_id) AS unique_customers,
        SUM(pur.total_amount) AS total_revenue,
        AVG(pur.total_amount) AS average_order_value,
        MAX(pur.purchase_date) AS latest_order,
        MIN(pur.purchase_date) AS first_order
    FROM PURCHASE pur
"#;

// Ties on total_sold fall back to product_id so the ranking is stable.
const TOP_PRODUCTS_SQL: &str = r#"
    SELECT p.product_name,
           CAST(SUM(pi.quantity) AS SIGNED) AS total_sold,
           SUM(pi.subtotal) AS revenue
    FROM PRODUCT p
        JOIN PURCHASE_ITEM pi ON p.product_id = pi.product_id
    GROUP BY p.product_id, p.product_name
    ORDER BY total_sold DESC, p.product_id ASC
    LIMIT ?
"#;

pub async fn sales_report(state: &AppState) -> AppResult<SalesReport> {
    let backend = state.orm.get_database_backend();

    let summary = SalesSummary::find_by_statement(Statement::from_string(
        backend,
        SALES_SUMMARY_SQL,
    ))
    .one(&state.orm)
    .await?
    .unwrap_or_default();

    let top_products = TopProduct::find_by_statement(Statement::from_sql_and_values(
        backend,
        TOP_PRODUCTS_SQL,
        [TOP_PRODUCTS_LIMIT.into()],
    ))
    .all(&state.orm)
    .await?;

    Ok(SalesReport {
        summary,
        top_products,
    })
}
