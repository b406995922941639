//! Permission labels declared on the product entity.
//!
//! These are identifiers only: the catalog stores and publishes them for an
//! outer authorization layer and never checks them itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const APP_LABEL: &str = "catalog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductPermission {
    /// Withdraw the publication of any product.
    CanCancelPublication,
    /// Change the description of any product.
    CanEditDescription,
    /// Move any product to another category.
    CanEditCategory,
}

impl ProductPermission {
    pub const ALL: [ProductPermission; 3] = [
        ProductPermission::CanCancelPublication,
        ProductPermission::CanEditDescription,
        ProductPermission::CanEditCategory,
    ];

    pub fn codename(&self) -> &'static str {
        match self {
            ProductPermission::CanCancelPublication => "can_cancel_publication",
            ProductPermission::CanEditDescription => "can_edit_description",
            ProductPermission::CanEditCategory => "can_edit_category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductPermission::CanCancelPublication => "Can cancel publication",
            ProductPermission::CanEditDescription => "Can edit description",
            ProductPermission::CanEditCategory => "Can edit category",
        }
    }

    /// Product field the capability governs.
    pub fn field(&self) -> &'static str {
        match self {
            ProductPermission::CanCancelPublication => "is_published",
            ProductPermission::CanEditDescription => "description",
            ProductPermission::CanEditCategory => "category",
        }
    }

    /// `app_label.codename`, the form authorization layers usually match on.
    pub fn qualified(&self) -> String {
        format!("{APP_LABEL}.{}", self.codename())
    }
}

impl fmt::Display for ProductPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codename())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PermissionInfo {
    pub codename: String,
    pub qualified: String,
    pub label: String,
    pub field: String,
    /// Always `any_product`: the capabilities reach beyond an owner's own rows.
    pub scope: String,
}

impl From<ProductPermission> for PermissionInfo {
    fn from(permission: ProductPermission) -> Self {
        Self {
            codename: permission.codename().to_string(),
            qualified: permission.qualified(),
            label: permission.label().to_string(),
            field: permission.field().to_string(),
            scope: "any_product".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codenames_are_distinct() {
        let mut codenames: Vec<_> = ProductPermission::ALL.iter().map(|p| p.codename()).collect();
        codenames.sort();
        codenames.dedup();
        assert_eq!(codenames.len(), 3);
    }

    #[test]
    fn display_matches_codename() {
        for permission in ProductPermission::ALL {
            assert_eq!(permission.to_string(), permission.codename());
        }
    }

    #[test]
    fn serializes_as_codename() {
        let json = serde_json::to_string(&ProductPermission::CanEditDescription).unwrap();
        assert_eq!(json, "\"can_edit_description\"");
    }

    #[test]
    fn info_carries_field_and_scope() {
        let info = PermissionInfo::from(ProductPermission::CanCancelPublication);
        assert_eq!(info.qualified, "catalog.can_cancel_publication");
        assert_eq!(info.field, "is_published");
        assert_eq!(info.scope, "any_product");
    }
}
