pub mod credit_cards;
pub mod customers;
pub mod products;
pub mod purchase_items;
pub mod purchases;

pub use credit_cards::Entity as CreditCards;
pub use customers::Entity as Customers;
pub use products::Entity as Products;
pub use purchase_items::Entity as PurchaseItems;
pub use purchases::Entity as Purchases;
