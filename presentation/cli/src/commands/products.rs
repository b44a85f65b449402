use std::path::PathBuf;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::browse::BrowseParams;
use business::domain::product::use_cases::create_listing::CreateListingParams;
use business::domain::product::value_objects::{Category, CategorySelection, Condition};
use business::domain::shared::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn browse(
    container: &DependencyContainer,
    selection: CategorySelection,
    search: Option<String>,
) -> anyhow::Result<()> {
    let products = container
        .browse_products
        .execute(BrowseParams { selection, search })
        .await?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }
    for product in &products {
        print_line(product);
    }
    Ok(())
}

pub async fn show(container: &DependencyContainer, id: ProductId) -> anyhow::Result<()> {
    match container.get_product.execute(&id).await {
        Ok(product) => {
            print_line(&product);
            println!("  {}", product.description);
            if !product.tags.is_empty() {
                println!("  tags: {}", product.tags.join(", "));
            }
            Ok(())
        }
        Err(ProductError::NotFound) => {
            println!("Product {} not found.", id);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn sell(
    container: &DependencyContainer,
    title: String,
    description: String,
    price: u64,
    category: Category,
    condition: Condition,
    location: String,
    tags: Vec<String>,
    images: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let result = container
        .create_listing
        .execute(CreateListingParams {
            title,
            description,
            price,
            category,
            condition,
            location,
            tags,
            images,
        })
        .await;

    match result {
        Ok(product) => {
            println!("Listing published: {} ({})", product.title, product.id);
            Ok(())
        }
        Err(ProductError::AuthRequired) => {
            println!("Please sign in to create a listing.");
            Ok(())
        }
        Err(
            error @ (ProductError::TitleEmpty
            | ProductError::DescriptionEmpty
            | ProductError::LocationEmpty
            | ProductError::ImagesRequired
            | ProductError::TooManyImages),
        ) => {
            println!("Invalid listing: {}", error);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn print_line(product: &Product) {
    println!(
        "{}  ₹{}  [{} / {}]  {} ({})",
        product.id, product.price, product.category, product.condition, product.title,
        product.location
    );
}
