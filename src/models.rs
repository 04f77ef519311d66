use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;

/// Read-side stock label; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub const LOW_STOCK_THRESHOLD: i32 = 10;

    pub fn from_quantity(quantity: i32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            q if q < Self::LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListing {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl CustomerListing {
    /// `"city, state"` when both are known.
    pub fn location(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct PurchaseRecord {
    pub first_name: String,
    pub last_name: String,
    pub purchase_id: i32,
    pub purchase_date: NaiveDateTime,
    pub total_amount: Decimal,
    pub status: String,
    pub card_type: String,
    pub card_last_four: String,
}

impl PurchaseRecord {
    pub fn masked_card(&self) -> String {
        mask_card(&self.card_last_four)
    }

    pub fn payment_label(&self) -> String {
        format!("{} {}", self.card_type, self.masked_card())
    }
}

/// Display form of a card: asterisks plus the last four digits.
pub fn mask_card(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let last_four: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{last_four}")
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseHistory {
    pub purchases: Vec<PurchaseRecord>,
}

impl PurchaseHistory {
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    pub fn customer_name(&self) -> Option<String> {
        self.purchases
            .first()
            .map(|p| format!("{} {}", p.first_name, p.last_name))
    }

    pub fn total_spent(&self) -> Decimal {
        self.purchases.iter().map(|p| p.total_amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, FromQueryResult)]
pub struct SalesSummary {
    pub total_orders: i64,
    pub unique_customers: i64,
    pub total_revenue: Option<Decimal>,
    pub average_order_value: Option<Decimal>,
    pub latest_order: Option<NaiveDateTime>,
    pub first_order: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct TopProduct {
    pub product_name: String,
    pub total_sold: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub summary: SalesSummary,
    pub top_products: Vec<TopProduct>,
}
