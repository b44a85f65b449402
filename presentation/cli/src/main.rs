use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use business::domain::product::value_objects::{Category, CategorySelection, Condition};
use business::domain::shared::value_objects::{ProductId, UserId};

mod commands;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// ThriftHub marketplace client
#[derive(Parser)]
#[command(name = "thrifthub")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the persisted session
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Browse products, optionally filtered by category or search
    Products {
        /// Category filter ("all", "electronics", "fashion", ...)
        #[arg(long, default_value = "all")]
        category: CategorySelection,
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one product
    Product {
        id: ProductId,
    },

    /// List the favorites of the signed-in user
    Favorites,

    /// Toggle a product in the favorites
    Favorite {
        id: ProductId,
    },

    /// Publish a new listing
    Sell {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Price as a whole currency amount
        #[arg(long)]
        price: u64,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        condition: Condition,
        #[arg(long)]
        location: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Image file, up to five times
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },

    /// Show the conversation with another user
    Messages {
        user_id: UserId,
    },

    /// Send a message about a listing
    Send {
        #[arg(long)]
        to: UserId,
        #[arg(long)]
        product: ProductId,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let container = DependencyContainer::new(&config);

    // Restore a persisted session before any command runs.
    container.restore_session.execute().await?;

    match cli.command {
        Commands::Register {
            name,
            email,
            phone,
            password,
        } => commands::session::register(&container, name, email, phone, password).await,
        Commands::Login { email, password } => {
            commands::session::login(&container, email, password).await
        }
        Commands::Logout => commands::session::logout(&container).await,
        Commands::Whoami => commands::session::whoami(&container).await,
        Commands::Products { category, search } => {
            commands::products::browse(&container, category, search).await
        }
        Commands::Product { id } => commands::products::show(&container, id).await,
        Commands::Favorites => commands::favorites::list(&container).await,
        Commands::Favorite { id } => commands::favorites::toggle(&container, id).await,
        Commands::Sell {
            title,
            description,
            price,
            category,
            condition,
            location,
            tags,
            images,
        } => {
            commands::products::sell(
                &container,
                title,
                description,
                price,
                category,
                condition,
                location,
                tags,
                images,
            )
            .await
        }
        Commands::Messages { user_id } => {
            commands::messages::conversation(&container, user_id).await
        }
        Commands::Send {
            to,
            product,
            content,
        } => commands::messages::send(&container, to, product, content).await,
    }
}
