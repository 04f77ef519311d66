//! Fixed-width text tables for the terminal.

use std::io::{self, Write};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{CustomerListing, ProductListing, PurchaseHistory, SalesReport};

const NOT_AVAILABLE: &str = "N/A";
const DESCRIPTION_WIDTH: usize = 20;

pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn rule(out: &mut impl Write, ch: char, width: usize) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(width))
}

/// Blank line, `=` rule, centered title, `=` rule.
pub fn banner(out: &mut impl Write, title: &str, width: usize) -> io::Result<()> {
    writeln!(out)?;
    rule(out, '=', width)?;
    writeln!(out, "{:^width$}", title)?;
    rule(out, '=', width)
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    banner(out, "MAIN MENU", 50)?;
    writeln!(out, "1. View All Customers")?;
    writeln!(out, "2. View All Products")?;
    writeln!(out, "3. Add New Product")?;
    writeln!(out, "4. Update Product Stock")?;
    writeln!(out, "5. Add New Customer")?;
    writeln!(out, "6. View Customer Purchase History")?;
    writeln!(out, "7. Search Products by Category")?;
    writeln!(out, "8. Generate Sales Report")?;
    writeln!(out, "9. Exit")?;
    rule(out, '=', 50)
}

pub fn customer_table(out: &mut impl Write, customers: &[CustomerListing]) -> io::Result<()> {
    banner(out, "CUSTOMER LIST", 80)?;
    writeln!(
        out,
        "{:<4} {:<20} {:<25} {:<15} {:<20}",
        "ID", "Name", "Email", "Phone", "Location"
    )?;
    rule(out, '-', 80)?;
    for customer in customers {
        let location = customer.location();
        writeln!(
            out,
            "{:<4} {:<20} {:<25} {:<15} {:<20}",
            customer.id,
            customer.name,
            customer.email,
            customer.phone.as_deref().unwrap_or(NOT_AVAILABLE),
            location.as_deref().unwrap_or(NOT_AVAILABLE),
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total customers: {}", customers.len())
}

pub fn product_row(product: &ProductListing) -> String {
    format!(
        "{:<4} {:<25} {:<15} {:<10} {:<8} {:<12}",
        product.id,
        product.name,
        product.category.as_deref().unwrap_or(NOT_AVAILABLE),
        money(product.price),
        product.stock_quantity,
        product.status,
    )
}

pub fn product_table(out: &mut impl Write, products: &[ProductListing]) -> io::Result<()> {
    banner(out, "PRODUCT CATALOG", 90)?;
    writeln!(
        out,
        "{:<4} {:<25} {:<15} {:<10} {:<8} {:<12}",
        "ID", "Product Name", "Category", "Price", "Stock", "Status"
    )?;
    rule(out, '-', 90)?;
    for product in products {
        writeln!(out, "{}", product_row(product))?;
    }
    writeln!(out)?;
    writeln!(out, "Total products: {}", products.len())
}

/// Descriptions longer than the column are cut and suffixed with `...`.
pub fn short_description(description: Option<&str>) -> String {
    match description {
        Some(text) if text.chars().count() > DESCRIPTION_WIDTH => {
            let head: String = text.chars().take(DESCRIPTION_WIDTH).collect();
            format!("{head}...")
        }
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn category_list(out: &mut impl Write, categories: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available categories:")?;
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, category)?;
    }
    Ok(())
}

pub fn category_results(
    out: &mut impl Write,
    category: &str,
    products: &[ProductListing],
) -> io::Result<()> {
    banner(
        out,
        &format!("PRODUCTS IN CATEGORY: {}", category.to_uppercase()),
        80,
    )?;
    writeln!(
        out,
        "{:<4} {:<30} {:<10} {:<8} {:<20}",
        "ID", "Name", "Price", "Stock", "Description"
    )?;
    rule(out, '-', 80)?;
    for product in products {
        writeln!(
            out,
            "{:<4} {:<30} {:<10} {:<8} {:<20}",
            product.id,
            product.name,
            money(product.price),
            product.stock_quantity,
            short_description(product.description.as_deref()),
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Found {} products in '{}' category",
        products.len(),
        category
    )
}

pub fn purchase_history(out: &mut impl Write, history: &PurchaseHistory) -> io::Result<()> {
    let name = history.customer_name().unwrap_or_default();
    banner(
        out,
        &format!("PURCHASE HISTORY FOR {}", name.to_uppercase()),
        80,
    )?;
    writeln!(
        out,
        "{:<12} {:<12} {:<10} {:<12} {:<15}",
        "Purchase ID", "Date", "Amount", "Status", "Payment"
    )?;
    rule(out, '-', 80)?;
    for purchase in &history.purchases {
        writeln!(
            out,
            "{:<12} {:<12} {:<10} {:<12} {:<15}",
            purchase.purchase_id,
            purchase.purchase_date.format("%Y-%m-%d").to_string(),
            money(purchase.total_amount),
            purchase.status,
            purchase.payment_label(),
        )?;
    }
    rule(out, '-', 80)?;
    writeln!(out, "Total purchases: {}", history.purchases.len())?;
    writeln!(out, "Total amount spent: {}", money(history.total_spent()))
}

fn timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn sales_report(out: &mut impl Write, report: &SalesReport) -> io::Result<()> {
    let summary = &report.summary;
    banner(out, "SALES REPORT", 60)?;
    writeln!(out, "Total Orders: {}", summary.total_orders)?;
    writeln!(out, "Unique Customers: {}", summary.unique_customers)?;
    writeln!(
        out,
        "Total Revenue: {}",
        money(summary.total_revenue.unwrap_or_default())
    )?;
    writeln!(
        out,
        "Average Order Value: {}",
        money(summary.average_order_value.unwrap_or_default())
    )?;
    writeln!(out, "Latest Order: {}", timestamp(summary.latest_order))?;
    writeln!(out, "First Order: {}", timestamp(summary.first_order))?;

    writeln!(out)?;
    rule(out, '-', 60)?;
    writeln!(out, "TOP 5 SELLING PRODUCTS:")?;
    rule(out, '-', 60)?;
    writeln!(out, "{:<30} {:<10} {:<10}", "Product", "Qty Sold", "Revenue")?;
    rule(out, '-', 60)?;
    for product in &report.top_products {
        writeln!(
            out,
            "{:<30} {:<10} {:<10}",
            product.product_name,
            product.total_sold,
            money(product.revenue),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PurchaseRecord, SalesSummary, StockStatus, TopProduct};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn money_pads_to_two_places() {
        assert_eq!(money(Decimal::new(999, 2)), "$9.99");
        assert_eq!(money(Decimal::new(5, 0)), "$5.00");
        assert_eq!(money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn product_row_shows_price_and_status() {
        let row = product_row(&ProductListing {
            id: 1,
            name: "Widget".into(),
            description: None,
            category: None,
            price: Decimal::new(999, 2),
            stock_quantity: 100,
            status: StockStatus::InStock,
        });
        assert!(row.starts_with("1    Widget"));
        assert!(row.contains("N/A"));
        assert!(row.contains("$9.99"));
        assert!(row.trim_end().ends_with("In Stock"));
    }

    #[test]
    fn short_description_truncates_after_twenty_chars() {
        assert_eq!(
            short_description(Some("A very long description text")),
            "A very long descript..."
        );
        assert_eq!(short_description(Some("exactly twenty chars")), "exactly twenty chars");
        assert_eq!(short_description(None), "N/A");
    }

    #[test]
    fn customer_table_falls_back_to_na() {
        let text = render(|out| {
            customer_table(
                out,
                &[CustomerListing {
                    id: 7,
                    name: "Ada Lovelace".into(),
                    email: "ada@example.com".into(),
                    phone: None,
                    city: Some("London".into()),
                    state: None,
                }],
            )
        });
        assert!(text.contains("CUSTOMER LIST"));
        assert!(text.contains("ada@example.com"));
        assert_eq!(text.matches("N/A").count(), 2);
        assert!(text.contains("Total customers: 1"));
    }

    #[test]
    fn purchase_history_masks_cards_and_totals() {
        let record = |id, amount| PurchaseRecord {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            purchase_id: id,
            purchase_date: at(2024, 3, id as u32),
            total_amount: amount,
            status: "Completed".into(),
            card_type: "Visa".into(),
            card_last_four: "1111".into(),
        };
        let history = PurchaseHistory {
            purchases: vec![record(2, Decimal::new(1050, 2)), record(1, Decimal::new(2000, 2))],
        };
        let text = render(|out| purchase_history(out, &history));
        assert!(text.contains("PURCHASE HISTORY FOR ADA LOVELACE"));
        assert!(text.contains("2024-03-02"));
        assert!(text.contains("Visa ****1111"));
        assert!(text.contains("Total purchases: 2"));
        assert!(text.contains("Total amount spent: $30.50"));
    }

    #[test]
    fn sales_report_without_orders() {
        let report = SalesReport {
            summary: SalesSummary {
                total_orders: 0,
                unique_customers: 0,
                total_revenue: None,
                average_order_value: None,
                latest_order: None,
                first_order: None,
            },
            top_products: Vec::new(),
        };
        let text = render(|out| sales_report(out, &report));
        assert!(text.contains("Total Orders: 0"));
        assert!(text.contains("Total Revenue: $0.00"));
        assert!(text.contains("Latest Order: N/A"));
    }

    #[test]
    fn sales_report_lists_top_products() {
        let report = SalesReport {
            summary: SalesSummary {
                total_orders: 3,
                unique_customers: 2,
                total_revenue: Some(Decimal::new(15000, 2)),
                average_order_value: Some(Decimal::new(5000, 2)),
                latest_order: Some(at(2024, 5, 1)),
                first_order: Some(at(2024, 1, 1)),
            },
            top_products: vec![TopProduct {
                product_name: "Laptop".into(),
                total_sold: 4,
                revenue: Decimal::new(400000, 2),
            }],
        };
        let text = render(|out| sales_report(out, &report));
        assert!(text.contains("Average Order Value: $50.00"));
        assert!(text.contains("Latest Order: 2024-05-01 10:30:00"));
        assert!(text.contains("Laptop"));
        assert!(text.contains("$4000.00"));
    }
}
