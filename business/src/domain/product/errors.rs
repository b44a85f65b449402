#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.location_empty")]
    LocationEmpty,
    #[error("product.images_required")]
    ImagesRequired,
    #[error("product.too_many_images")]
    TooManyImages,
    #[error("product.auth_required")]
    AuthRequired,
    #[error("product.not_found")]
    NotFound,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
