use business::domain::session::errors::SessionError;
use business::domain::session::gateway::{Credentials, NewAccount};
use business::domain::session::model::Identity;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn login(
    container: &DependencyContainer,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    match container.login.execute(Credentials { email, password }).await {
        Ok(identity) => {
            println!("Welcome back, {}!", identity.name);
            // Pull the authoritative favorites for the fresh session.
            if let Ok(favorites) = container.sync_favorites.execute().await {
                println!("You have {} saved favorites.", favorites.len());
            }
            Ok(())
        }
        Err(SessionError::InvalidCredentials) => {
            println!("Invalid email or password.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

pub async fn register(
    container: &DependencyContainer,
    name: String,
    email: String,
    phone: String,
    password: String,
) -> anyhow::Result<()> {
    match container
        .register
        .execute(NewAccount {
            name,
            email,
            phone,
            password,
        })
        .await
    {
        Ok(identity) => {
            println!("Account created. Welcome to ThriftHub, {}!", identity.name);
            Ok(())
        }
        Err(SessionError::EmailTaken) => {
            println!("That email is already registered.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

pub async fn logout(container: &DependencyContainer) -> anyhow::Result<()> {
    container.logout.execute().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.fetch_profile.execute().await {
        Ok(identity) => {
            print_identity(&identity);
            Ok(())
        }
        Err(SessionError::AuthRequired) => {
            println!("Not signed in.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn print_identity(identity: &Identity) {
    println!("{} <{}>", identity.name, identity.email);
    if let Some(location) = &identity.location {
        println!("  location: {}", location);
    }
    println!(
        "  rating: {:.1}  sales: {}  purchases: {}",
        identity.rating, identity.total_sales, identity.total_purchases
    );
}
