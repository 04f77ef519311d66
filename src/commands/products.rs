use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    console::Console,
    dto::products::NewProduct,
    error::{AppError, AppResult},
    input::{self, ListChoice},
    render,
    services::product_service,
    state::AppState,
};

pub async fn list<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let products = product_service::list_products(state).await?;
    render::product_table(console.out(), &products)?;
    Ok(())
}

pub async fn add<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render::banner(console.out(), "ADD NEW PRODUCT", 50)?;

    let name = input::required_text(&console.prompt("Product name: ").await?, "Product name")?;
    let description = input::optional_text(&console.prompt("Description (optional): ").await?);
    let price = input::price(&console.prompt("Price: $").await?)?;
    let stock_quantity =
        input::stock_quantity(&console.prompt("Initial stock quantity: ").await?)?;
    let category = input::optional_text(&console.prompt("Category (optional): ").await?);

    let payload = NewProduct {
        name,
        description,
        price,
        stock_quantity,
        category,
    };
    let name = payload.name.clone();
    let id = product_service::create_product(state, payload).await?;
    console.line(format!("Product '{name}' added successfully with ID: {id}"))
}

pub async fn update_stock<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    list(state, console).await?;

    let id = input::record_id(
        &console.prompt("\nEnter Product ID to update stock: ").await?,
        "Product ID",
    )?;
    let product = product_service::find_product(state, id)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    console.line(format!("\nProduct: {}", product.product_name))?;
    console.line(format!("Current stock: {}", product.stock_quantity))?;

    let new_stock = input::stock_quantity(&console.prompt("New stock quantity: ").await?)?;
    product_service::set_stock(state, id, new_stock).await?;

    console.line(format!(
        "Stock updated for '{}': {} → {}",
        product.product_name, product.stock_quantity, new_stock
    ))
}

pub async fn search_by_category<R, W>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let categories = product_service::list_categories(state).await?;
    if categories.is_empty() {
        return console.line("No categories found");
    }
    render::category_list(console.out(), &categories)?;

    let answer = console
        .prompt("\nSelect category number (or 0 to enter custom): ")
        .await?;
    let category = match input::list_choice(&answer, categories.len())? {
        ListChoice::Custom => console.prompt("Enter category name: ").await?,
        ListChoice::Listed(index) => categories[index].clone(),
    };

    let products = product_service::search_by_category(state, &category).await?;
    if products.is_empty() {
        return console.line(format!("No products found in category '{category}'"));
    }
    render::category_results(console.out(), &category, &products)?;
    Ok(())
}
