use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    console::Console,
    dto::customers::NewCustomer,
    error::{AppError, AppResult},
    input, render,
    services::customer_service,
    state::AppState,
};

pub async fn list<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let customers = customer_service::list_customers(state).await?;
    render::customer_table(console.out(), &customers)?;
    Ok(())
}

pub async fn add<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render::banner(console.out(), "REGISTER NEW CUSTOMER", 50)?;

    let first_name = input::required_text(&console.prompt("First name: ").await?, "First name")?;
    let last_name = input::required_text(&console.prompt("Last name: ").await?, "Last name")?;
    let email = input::email(&console.prompt("Email: ").await?)?;

    if customer_service::email_registered(state, &email).await? {
        return Err(AppError::EmailTaken);
    }

    let payload = NewCustomer {
        first_name,
        last_name,
        email,
        phone: input::optional_text(&console.prompt("Phone (optional): ").await?),
        address: input::optional_text(&console.prompt("Address (optional): ").await?),
        city: input::optional_text(&console.prompt("City (optional): ").await?),
        state: input::optional_text(&console.prompt("State (optional): ").await?),
        zip_code: input::optional_text(&console.prompt("ZIP code (optional): ").await?),
    };
    let name = payload.full_name();
    let id = customer_service::create_customer(state, payload).await?;
    console.line(format!(
        "Customer '{name}' registered successfully with ID: {id}"
    ))
}
