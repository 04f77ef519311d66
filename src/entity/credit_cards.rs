use sea_orm::entity::prelude::*;

// card_number is never selected by the command layer; only card_type and the
// last four digits leave the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "CREDIT_CARD")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub card_id: i32,
    pub customer_id: i32,
    pub card_number: String,
    pub card_type: String,
    pub cardholder_name: String,
    pub expiry_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::CustomerId"
    )]
    Customers,
    #[sea_orm(has_many = "super::purchases::Entity")]
    Purchases,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::purchases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
