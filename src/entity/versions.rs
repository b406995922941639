use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

pub const VERSION_NAME_MAX_LENGTH: usize = 100;
pub const VERSION_NUMBER_MAX_DIGITS: u32 = 10;
pub const VERSION_NUMBER_DECIMAL_PLACES: u32 = 3;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "versions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 3)))")]
    pub version_number: Decimal,
    /// Unique across every product, not only within one.
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub version_name: String,
    pub is_actual: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.is_actual.is_not_set() {
            self.is_actual = Set(true);
        }
        Ok(self)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version_name)
    }
}
