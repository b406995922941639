use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        users::{CreateUserRequest, UserList},
        versions::{CreateVersionRequest, UpdateVersionRequest, VersionList},
    },
    metadata::{EntityMeta, FieldKind, FieldMeta},
    models::{Category, Product, User, Version},
    permissions::{PermissionInfo, ProductPermission},
    response::{ApiResponse, Meta},
    routes::{categories, health, metadata, products, users, versions},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        categories::list_category_products,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_product_versions,
        products::list_permissions,
        versions::list_versions,
        versions::get_version,
        versions::create_version,
        versions::update_version,
        versions::delete_version,
        users::list_users,
        users::create_user,
        users::delete_user,
        metadata::list_metadata,
        metadata::get_metadata
    ),
    components(
        schemas(
            Category,
            Product,
            Version,
            User,
            CategoryList,
            ProductList,
            VersionList,
            UserList,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateVersionRequest,
            UpdateVersionRequest,
            CreateUserRequest,
            ProductPermission,
            PermissionInfo,
            EntityMeta,
            FieldMeta,
            FieldKind,
            Meta,
            ApiResponse<Category>,
            ApiResponse<Product>,
            ApiResponse<Version>,
            ApiResponse<CategoryList>,
            ApiResponse<ProductList>,
            ApiResponse<VersionList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Versions", description = "Product version endpoints"),
        (name = "Users", description = "Owner identities referenced by products"),
        (name = "Metadata", description = "Field metadata and permission labels"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/categories",
            "/api/products/{id}",
            "/api/products/permissions",
            "/api/versions",
            "/api/metadata/{entity}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
