use chrono::{NaiveDate, NaiveDateTime};
use ecommerce_cli::{
    config::AppConfig,
    db::{connect, run_migrations},
    entity::{
        CreditCards, Customers, Products, PurchaseItems, Purchases, credit_cards, customers,
        products, purchase_items, purchases,
    },
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseTransaction, EntityTrait, PaginatorTrait, TransactionTrait,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    let orm = connect(&config.database_url()?).await?;
    // Ensure the schema exists.
    run_migrations(&orm, "migrations").await?;

    if Products::find().count(&orm).await? > 0 {
        println!("Catalog already populated; nothing to seed");
        return Ok(());
    }

    let txn = orm.begin().await?;
    let product_ids = seed_products(&txn).await?;
    let customer_ids = seed_customers(&txn).await?;
    let card_ids = seed_cards(&txn, &customer_ids).await?;
    seed_purchases(&txn, &customer_ids, &card_ids, &product_ids).await?;
    txn.commit().await?;

    orm.close().await?;
    println!(
        "Seed completed: {} products, {} customers",
        product_ids.len(),
        customer_ids.len()
    );
    Ok(())
}

struct SeedProduct {
    id: i32,
    price: Decimal,
}

async fn seed_products(txn: &DatabaseTransaction) -> anyhow::Result<Vec<SeedProduct>> {
    let catalog = [
        ("Laptop Pro 15", "High-performance laptop with 16GB RAM", 129999, 25, "Electronics"),
        ("Wireless Mouse", "Ergonomic wireless mouse", 2999, 150, "Electronics"),
        ("USB-C Hub", "7-in-1 USB-C adapter", 4999, 8, "Electronics"),
        ("Office Chair", "Adjustable mesh office chair", 24999, 12, "Furniture"),
        ("Standing Desk", "Electric height-adjustable desk", 49999, 0, "Furniture"),
        ("Cordless Drill", "18V drill with two batteries", 8999, 40, "Tools"),
    ];

    let mut seeded = Vec::with_capacity(catalog.len());
    for (name, description, cents, stock, category) in catalog {
        let price = Decimal::new(cents, 2);
        let result = Products::insert(products::ActiveModel {
            product_id: NotSet,
            product_name: Set(name.into()),
            description: Set(Some(description.into())),
            price: Set(price),
            stock_quantity: Set(stock),
            category: Set(Some(category.into())),
        })
        .exec(txn)
        .await?;
        seeded.push(SeedProduct {
            id: result.last_insert_id,
            price,
        });
    }
    println!("Seeded products");
    Ok(seeded)
}

async fn seed_customers(txn: &DatabaseTransaction) -> anyhow::Result<Vec<i32>> {
    let people = [
        ("John", "Smith", "john.smith@email.com", Some("555-0101"), "Boston", "MA"),
        ("Sarah", "Johnson", "sarah.j@email.com", Some("555-0102"), "Austin", "TX"),
        ("Michael", "Brown", "m.brown@email.com", None, "Denver", "CO"),
    ];

    let mut ids = Vec::with_capacity(people.len());
    for (first, last, email, phone, city, state) in people {
        let result = Customers::insert(customers::ActiveModel {
            customer_id: NotSet,
            first_name: Set(first.into()),
            last_name: Set(last.into()),
            email: Set(email.into()),
            phone: Set(phone.map(Into::into)),
            address: Set(None),
            city: Set(Some(city.into())),
            state: Set(Some(state.into())),
            zip_code: Set(None),
            registration_date: NotSet,
        })
        .exec(txn)
        .await?;
        ids.push(result.last_insert_id);
    }
    println!("Seeded customers");
    Ok(ids)
}

async fn seed_cards(txn: &DatabaseTransaction, customer_ids: &[i32]) -> anyhow::Result<Vec<i32>> {
    let numbers = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "MasterCard"),
        ("340000000000009", "Amex"),
    ];
    let expiry = NaiveDate::from_ymd_opt(2028, 12, 31)
        .ok_or_else(|| anyhow::anyhow!("invalid expiry date"))?;

    let mut ids = Vec::with_capacity(customer_ids.len());
    for (customer_id, (number, card_type)) in customer_ids.iter().zip(numbers) {
        let result = CreditCards::insert(credit_cards::ActiveModel {
            card_id: NotSet,
            customer_id: Set(*customer_id),
            card_number: Set(number.into()),
            card_type: Set(card_type.into()),
            cardholder_name: Set(format!("Customer {customer_id}")),
            expiry_date: Set(expiry),
        })
        .exec(txn)
        .await?;
        ids.push(result.last_insert_id);
    }
    println!("Seeded credit cards");
    Ok(ids)
}

fn purchased_at(month: u32, day: u32) -> anyhow::Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(14, 30, 0))
        .ok_or_else(|| anyhow::anyhow!("invalid purchase date 2024-{month}-{day}"))
}

async fn seed_purchases(
    txn: &DatabaseTransaction,
    customer_ids: &[i32],
    card_ids: &[i32],
    catalog: &[SeedProduct],
) -> anyhow::Result<()> {
    // (customer index, month, day, status, [(product index, quantity)])
    let orders: [(usize, u32, u32, &str, &[(usize, i32)]); 4] = [
        (0, 1, 15, "Completed", &[(0, 1), (1, 2)]),
        (1, 2, 3, "Completed", &[(3, 1)]),
        (0, 3, 20, "Shipped", &[(2, 3), (1, 1)]),
        (1, 4, 9, "Pending", &[(5, 2)]),
    ];

    for (customer, month, day, status, lines) in orders {
        let items: Vec<(&SeedProduct, i32)> = lines
            .iter()
            .map(|&(product, quantity)| (&catalog[product], quantity))
            .collect();
        let total: Decimal = items
            .iter()
            .map(|(product, quantity)| product.price * Decimal::from(*quantity))
            .sum();

        let purchase = Purchases::insert(purchases::ActiveModel {
            purchase_id: NotSet,
            customer_id: Set(customer_ids[customer]),
            card_id: Set(card_ids[customer]),
            purchase_date: Set(purchased_at(month, day)?),
            total_amount: Set(total),
            status: Set(status.into()),
        })
        .exec(txn)
        .await?;

        for (product, quantity) in items {
            PurchaseItems::insert(purchase_items::ActiveModel {
                item_id: NotSet,
                purchase_id: Set(purchase.last_insert_id),
                product_id: Set(product.id),
                quantity: Set(quantity),
                unit_price: Set(product.price),
                subtotal: Set(product.price * Decimal::from(quantity)),
            })
            .exec(txn)
            .await?;
        }
    }
    println!("Seeded purchases");
    Ok(())
}
