use ecommerce_cli::{
    db::{connect, run_migrations},
    dto::{customers::NewCustomer, products::NewProduct},
    models::StockStatus,
    services::{customer_service, product_service, purchase_service, report_service},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

// Integration flow against a live MySQL: add product -> adjust stock -> search;
// register customer -> duplicate email check -> empty history; sales report.
#[tokio::test]
async fn catalog_and_customer_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let id = product_service::create_product(
        &state,
        NewProduct {
            name: "Flow Widget".into(),
            description: None,
            price: Decimal::new(999, 2),
            stock_quantity: 100,
            category: Some("FlowTools".into()),
        },
    )
    .await?;

    let listed = product_service::list_products(&state).await?;
    let widget = listed
        .iter()
        .find(|p| p.id == id)
        .expect("new product listed");
    assert_eq!(widget.price, Decimal::new(999, 2));
    assert_eq!(widget.status, StockStatus::InStock);
    assert_eq!(widget.description, None);

    product_service::set_stock(&state, id, 5).await?;
    let stored = product_service::find_product(&state, id)
        .await?
        .expect("product still present");
    assert_eq!(stored.stock_quantity, 5);

    let categories = product_service::list_categories(&state).await?;
    assert!(categories.iter().any(|c| c == "FlowTools"));

    let found = product_service::search_by_category(&state, "flowt").await?;
    assert!(found.iter().any(|p| p.id == id));
    assert_eq!(
        found.iter().find(|p| p.id == id).map(|p| p.status),
        Some(StockStatus::LowStock)
    );

    let email = "flow.customer@example.com";
    assert!(!customer_service::email_registered(&state, email).await?);
    let customer_id = customer_service::create_customer(
        &state,
        NewCustomer {
            first_name: "Flow".into(),
            last_name: "Customer".into(),
            email: email.into(),
            city: Some("Austin".into()),
            ..Default::default()
        },
    )
    .await?;
    assert!(customer_service::email_registered(&state, email).await?);

    let customers = customer_service::list_customers(&state).await?;
    let listed = customers
        .iter()
        .find(|c| c.id == customer_id)
        .expect("new customer listed");
    assert_eq!(listed.phone, None);
    assert_eq!(listed.location(), None);

    let history = purchase_service::purchase_history(&state, customer_id).await?;
    assert!(history.is_empty());

    let report = report_service::sales_report(&state).await?;
    assert!(report.top_products.len() <= report_service::TOP_PRODUCTS_LIMIT as usize);

    state.close().await?;
    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = connect(database_url).await?;
    run_migrations(&orm, "migrations").await?;
    truncate_all(&orm).await?;
    Ok(AppState::new(orm))
}

async fn truncate_all(conn: &sea_orm::DatabaseConnection) -> anyhow::Result<()> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(backend, "SET FOREIGN_KEY_CHECKS = 0"))
        .await?;
    for table in [
        "PURCHASE_ITEM",
        "PURCHASE",
        "CREDIT_CARD",
        "CUSTOMER",
        "PRODUCT",
    ] {
        conn.execute(Statement::from_string(backend, format!("TRUNCATE TABLE {table}")))
            .await?;
    }
    conn.execute(Statement::from_string(backend, "SET FOREIGN_KEY_CHECKS = 1"))
        .await?;
    Ok(())
}
