use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::set::FavoriteSet;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::holder::SessionHolder;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub session: Arc<SessionHolder>,
    pub store: Arc<dyn SessionStore>,
    pub favorites: Arc<FavoriteSet>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        self.session.sign_out();
        // Favorites are keyed per session user; drop them with the session.
        self.favorites.clear();
        self.store.clear().await?;
        self.logger.info("Signed out");
        Ok(())
    }
}
