use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{categories, products, users, versions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    pub description: String,
    /// Path of the stored image, relative to the media root.
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub price: Decimal,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub manufactured_at: NaiveDate,
    pub owner_id: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Version {
    pub id: i32,
    pub product_id: i32,
    pub version_number: Decimal,
    pub version_name: String,
    pub is_actual: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
            category_id: model.category_id,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
            manufactured_at: model.manufactured_at,
            owner_id: model.owner_id,
            is_published: model.is_published,
        }
    }
}

impl From<versions::Model> for Version {
    fn from(model: versions::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            version_number: model.version_number,
            version_name: model.version_name,
            is_actual: model.is_actual,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}
