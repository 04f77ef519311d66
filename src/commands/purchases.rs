use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    commands::customers,
    console::Console,
    error::AppResult,
    input, render,
    services::purchase_service,
    state::AppState,
};

pub async fn history<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    customers::list(state, console).await?;

    let customer_id = input::record_id(
        &console
            .prompt("\nEnter Customer ID to view purchases: ")
            .await?,
        "Customer ID",
    )?;

    let history = purchase_service::purchase_history(state, customer_id).await?;
    if history.is_empty() {
        return console.line("No purchases found for this customer");
    }
    render::purchase_history(console.out(), &history)?;
    Ok(())
}
