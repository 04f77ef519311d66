use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use crate::{
    dto::customers::NewCustomer,
    entity::customers::{ActiveModel, Column, Entity as Customers, Model as CustomerModel},
    error::AppResult,
    models::CustomerListing,
    services::rollback,
    state::AppState,
};

/// All customers, most recently registered first.
pub async fn list_customers(state: &AppState) -> AppResult<Vec<CustomerListing>> {
    let items = Customers::find()
        .order_by_desc(Column::RegistrationDate)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();
    Ok(items)
}

pub async fn email_registered(state: &AppState, email: &str) -> AppResult<bool> {
    let existing = Customers::find()
        .filter(Column::Email.eq(email))
        .one(&state.orm)
        .await?;
    Ok(existing.is_some())
}

/// Insert one customer and return the generated id. `registration_date` is
/// filled in by the column default.
pub async fn create_customer(state: &AppState, payload: NewCustomer) -> AppResult<i32> {
    let active = ActiveModel {
        customer_id: NotSet,
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
        city: Set(payload.city),
        state: Set(payload.state),
        zip_code: Set(payload.zip_code),
        registration_date: NotSet,
    };

    let txn = state.orm.begin().await?;
    match Customers::insert(active).exec(&txn).await {
        Ok(result) => {
            txn.commit().await?;
            tracing::info!(customer_id = result.last_insert_id, "customer registered");
            Ok(result.last_insert_id)
        }
        Err(err) => {
            rollback(txn).await;
            Err(err.into())
        }
    }
}

fn customer_from_entity(model: CustomerModel) -> CustomerListing {
    CustomerListing {
        id: model.customer_id,
        name: format!("{} {}", model.first_name, model.last_name),
        email: model.email,
        phone: model.phone,
        city: model.city,
        state: model.state,
    }
}
