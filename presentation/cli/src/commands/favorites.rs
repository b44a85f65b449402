use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::use_cases::toggle::FavoriteToggle;
use business::domain::shared::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn list(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.sync_favorites.execute().await {
        Ok(products) if products.is_empty() => {
            println!("No favorites yet.");
            Ok(())
        }
        Ok(products) => {
            for product in &products {
                println!("{}  ₹{}  {}", product.id, product.price, product.title);
            }
            Ok(())
        }
        Err(FavoriteError::AuthRequired) => {
            println!("Please sign in to see your favorites.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

pub async fn toggle(container: &DependencyContainer, id: ProductId) -> anyhow::Result<()> {
    match container.toggle_favorite.execute(&id).await {
        Ok(FavoriteToggle::Added) => {
            println!("Added {} to favorites.", id);
            Ok(())
        }
        Ok(FavoriteToggle::Removed) => {
            println!("Removed {} from favorites.", id);
            Ok(())
        }
        Err(FavoriteError::AuthRequired) => {
            println!("Please sign in to save favorites.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
