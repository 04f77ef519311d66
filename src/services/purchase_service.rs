use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{
    error::AppResult,
    models::{PurchaseHistory, PurchaseRecord},
    state::AppState,
};

// Only the last four digits of the card number are selected.
const PURCHASE_HISTORY_SQL: &str = r#"
    SELECT c.first_name, c.last_name, p.purchase_id, p.purchase_date,
           p.total_amount, p.status, cc.card_type,
           RIGHT(cc.card_number, 4) AS card_last_four
    FROM CUSTOMER c
        JOIN PURCHASE p ON c.customer_id = p.customer_id
        JOIN CREDIT_CARD cc ON p.card_id = cc.card_id
    WHERE c.customer_id = ?
    ORDER BY p.purchase_date DESC
"#;

/// Purchases for one customer, newest first, each with its masked payment card.
pub async fn purchase_history(state: &AppState, customer_id: i32) -> AppResult<PurchaseHistory> {
    let stmt = Statement::from_sql_and_values(
        state.orm.get_database_backend(),
        PURCHASE_HISTORY_SQL,
        [customer_id.into()],
    );
    let purchases = PurchaseRecord::find_by_statement(stmt)
        .all(&state.orm)
        .await?;
    tracing::debug!(customer_id, count = purchases.len(), "purchase history loaded");
    Ok(PurchaseHistory { purchases })
}
