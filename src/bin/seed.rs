use catalog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        categories::CreateCategoryRequest, products::CreateProductRequest,
        users::CreateUserRequest, versions::CreateVersionRequest,
    },
    entity::Categories,
    services::{category_service, product_service, user_service, version_service},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    let state = AppState { orm };

    if Categories::find().count(&state.orm).await? > 0 {
        tracing::info!("catalog already has data, nothing to seed");
        return Ok(());
    }

    let owner = user_service::create_user(
        &state,
        CreateUserRequest {
            username: "manager".into(),
            email: Some("manager@example.com".into()),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("user not returned"))?;

    let catalog = [
        (
            "Laptops",
            "Portable computers",
            vec![
                ("Notebook Air 13", "Light 13-inch laptop", Decimal::new(99_900, 2)),
                ("Notebook Pro 16", "16-inch workstation", Decimal::new(249_900, 2)),
            ],
        ),
        (
            "Phones",
            "Smartphones and accessories",
            vec![("Pocket 5", "Compact smartphone", Decimal::new(59_900, 2))],
        ),
    ];

    for (name, description, products) in catalog {
        let category = category_service::create_category(
            &state,
            CreateCategoryRequest {
                name: name.into(),
                description: description.into(),
            },
        )
        .await?
        .data
        .ok_or_else(|| anyhow::anyhow!("category not returned"))?;

        for (product_name, product_description, price) in products {
            let product = product_service::create_product(
                &state,
                CreateProductRequest {
                    name: Some(product_name.into()),
                    description: product_description.into(),
                    category_id: Some(category.id),
                    price,
                    owner_id: Some(owner.id),
                    is_published: Some(true),
                    ..Default::default()
                },
            )
            .await?
            .data
            .ok_or_else(|| anyhow::anyhow!("product not returned"))?;

            version_service::create_version(
                &state,
                CreateVersionRequest {
                    product_id: product.id,
                    version_number: Decimal::new(1_000, 3),
                    version_name: format!("{product_name} 1.0"),
                    is_actual: None,
                },
            )
            .await?;
        }
    }

    tracing::info!(owner_id = owner.id, "seed completed");
    Ok(())
}
