use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{
    dto::products::NewProduct,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::AppResult,
    models::{ProductListing, StockStatus},
    services::rollback,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<ProductListing>> {
    let items = Products::find()
        .order_by_asc(Column::Category)
        .order_by_asc(Column::ProductName)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

pub async fn find_product(state: &AppState, id: i32) -> AppResult<Option<ProductModel>> {
    let product = Products::find_by_id(id).one(&state.orm).await?;
    Ok(product)
}

/// Insert one product and return its generated id.
pub async fn create_product(state: &AppState, payload: NewProduct) -> AppResult<i32> {
    let active = ActiveModel {
        product_id: NotSet,
        product_name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        stock_quantity: Set(payload.stock_quantity),
        category: Set(payload.category),
    };

    let txn = state.orm.begin().await?;
    match Products::insert(active).exec(&txn).await {
        Ok(result) => {
            txn.commit().await?;
            tracing::info!(product_id = result.last_insert_id, "product created");
            Ok(result.last_insert_id)
        }
        Err(err) => {
            rollback(txn).await;
            Err(err.into())
        }
    }
}

pub async fn set_stock(state: &AppState, id: i32, quantity: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let result = Products::update_many()
        .col_expr(Column::StockQuantity, Expr::value(quantity))
        .filter(Column::ProductId.eq(id))
        .exec(&txn)
        .await;

    match result {
        Ok(_) => {
            txn.commit().await?;
            tracing::info!(product_id = id, quantity, "stock updated");
            Ok(())
        }
        Err(err) => {
            rollback(txn).await;
            Err(err.into())
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: String,
}

/// Distinct non-null categories in alphabetical order.
pub async fn list_categories(state: &AppState) -> AppResult<Vec<String>> {
    let rows = Products::find()
        .select_only()
        .column(Column::Category)
        .distinct()
        .filter(Column::Category.is_not_null())
        .order_by_asc(Column::Category)
        .into_model::<CategoryRow>()
        .all(&state.orm)
        .await?;
    Ok(rows.into_iter().map(|row| row.category).collect())
}

/// Case-insensitive substring match on category, ordered by name.
pub async fn search_by_category(state: &AppState, term: &str) -> AppResult<Vec<ProductListing>> {
    let pattern = format!("%{}%", term.to_lowercase());
    tracing::debug!(pattern = %pattern, "searching products by category");

    let items = Products::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Category))).like(pattern))
        .order_by_asc(Column::ProductName)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

fn product_from_entity(model: ProductModel) -> ProductListing {
    ProductListing {
        id: model.product_id,
        status: StockStatus::from_quantity(model.stock_quantity),
        name: model.product_name,
        description: model.description,
        category: model.category,
        price: model.price,
        stock_quantity: model.stock_quantity,
    }
}
