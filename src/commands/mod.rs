//! One handler per menu action. Handlers prompt, validate, call a service,
//! and render; errors bubble up to the menu which reports them.

use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{console::Console, error::AppResult, menu::MenuChoice, state::AppState};

pub mod customers;
pub mod products;
pub mod purchases;
pub mod reports;

pub async fn dispatch<R, W>(
    choice: MenuChoice,
    state: &AppState,
    console: &mut Console<R, W>,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match choice {
        MenuChoice::ListCustomers => customers::list(state, console).await,
        MenuChoice::ListProducts => products::list(state, console).await,
        MenuChoice::AddProduct => products::add(state, console).await,
        MenuChoice::UpdateStock => products::update_stock(state, console).await,
        MenuChoice::AddCustomer => customers::add(state, console).await,
        MenuChoice::CustomerPurchases => purchases::history(state, console).await,
        MenuChoice::SearchByCategory => products::search_by_category(state, console).await,
        MenuChoice::SalesReport => reports::sales(state, console).await,
        MenuChoice::Exit => Ok(()),
    }
}
