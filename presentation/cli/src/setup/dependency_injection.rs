use std::sync::{Arc, Mutex};

use logger::TracingLogger;
use rest::auth_gateway::RestAuthGateway;
use rest::catalog_gateway::RestCatalogGateway;
use rest::client::RestClient;
use rest::favorite_gateway::RestFavoriteGateway;
use rest::message_gateway::RestMessageGateway;
use session_file::SessionFileStore;

use business::application::favorite::sync::SyncFavoritesUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::message::conversation::GetConversationUseCaseImpl;
use business::application::message::send::SendMessageUseCaseImpl;
use business::application::product::browse::BrowseProductsUseCaseImpl;
use business::application::product::create_listing::CreateListingUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::application::session::profile::FetchProfileUseCaseImpl;
use business::application::session::register::RegisterUseCaseImpl;
use business::application::session::restore::RestoreSessionUseCaseImpl;
use business::domain::favorite::set::FavoriteSet;
use business::domain::favorite::use_cases::sync::SyncFavoritesUseCase;
use business::domain::favorite::use_cases::toggle::ToggleFavoriteUseCase;
use business::domain::message::use_cases::conversation::GetConversationUseCase;
use business::domain::message::use_cases::send::SendMessageUseCase;
use business::domain::product::catalog::Catalog;
use business::domain::product::use_cases::browse::BrowseProductsUseCase;
use business::domain::product::use_cases::create_listing::CreateListingUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::session::holder::SessionHolder;
use business::domain::session::store::SessionStore;
use business::domain::session::use_cases::login::LoginUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::session::use_cases::profile::FetchProfileUseCase;
use business::domain::session::use_cases::register::RegisterUseCase;
use business::domain::session::use_cases::restore::RestoreSessionUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub login: Arc<dyn LoginUseCase>,
    pub register: Arc<dyn RegisterUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
    pub restore_session: Arc<dyn RestoreSessionUseCase>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase>,
    pub browse_products: Arc<dyn BrowseProductsUseCase>,
    pub get_product: Arc<dyn GetProductByIdUseCase>,
    pub create_listing: Arc<dyn CreateListingUseCase>,
    pub toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    pub sync_favorites: Arc<dyn SyncFavoritesUseCase>,
    pub send_message: Arc<dyn SendMessageUseCase>,
    pub get_conversation: Arc<dyn GetConversationUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Process-wide state
        let session = Arc::new(SessionHolder::new());
        let favorites = Arc::new(FavoriteSet::new());
        let catalog = Arc::new(Mutex::new(Catalog::new()));

        // Infrastructure adapters
        let store: Arc<dyn SessionStore> =
            Arc::new(SessionFileStore::new(config.session.file.clone()));
        let client = Arc::new(RestClient::new(
            config.api.base_url.clone(),
            config.api.timeout,
            session.clone(),
            store.clone(),
        ));
        let auth_gateway = Arc::new(RestAuthGateway::new(client.clone()));
        let catalog_gateway = Arc::new(RestCatalogGateway::new(client.clone()));
        let favorite_gateway = Arc::new(RestFavoriteGateway::new(client.clone()));
        let message_gateway = Arc::new(RestMessageGateway::new(client));

        // Session use cases
        let login = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway.clone(),
            session: session.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let register = Arc::new(RegisterUseCaseImpl {
            gateway: auth_gateway.clone(),
            session: session.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            session: session.clone(),
            store: store.clone(),
            favorites: favorites.clone(),
            logger: logger.clone(),
        });
        let restore_session = Arc::new(RestoreSessionUseCaseImpl {
            session: session.clone(),
            store,
            logger: logger.clone(),
        });
        let fetch_profile = Arc::new(FetchProfileUseCaseImpl {
            gateway: auth_gateway,
            session: session.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let browse_products = Arc::new(BrowseProductsUseCaseImpl {
            catalog,
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let get_product = Arc::new(GetProductByIdUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let create_listing = Arc::new(CreateListingUseCaseImpl {
            gateway: catalog_gateway,
            session: session.clone(),
            logger: logger.clone(),
        });

        // Favorite use cases
        let toggle_favorite = Arc::new(ToggleFavoriteUseCaseImpl {
            favorites: favorites.clone(),
            gateway: favorite_gateway.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let sync_favorites = Arc::new(SyncFavoritesUseCaseImpl {
            favorites,
            gateway: favorite_gateway,
            session: session.clone(),
            logger: logger.clone(),
        });

        // Message use cases
        let send_message = Arc::new(SendMessageUseCaseImpl {
            gateway: message_gateway.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_conversation = Arc::new(GetConversationUseCaseImpl {
            gateway: message_gateway,
            session,
            logger,
        });

        Self {
            login,
            register,
            logout,
            restore_session,
            fetch_profile,
            browse_products,
            get_product,
            create_listing,
            toggle_favorite,
            sync_favorites,
            send_message,
            get_conversation,
        }
    }
}
