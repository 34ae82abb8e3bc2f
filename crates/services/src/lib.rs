#![forbid(unsafe_code)]

pub mod app_services;
pub mod assignment_service;
pub mod auth_service;
pub mod catalog_service;
pub mod delay;
pub mod error;
pub mod recommendation;
pub mod wishlist_service;

pub use atelier_core::Clock;

pub use error::{
    AppServicesError, AssignmentServiceError, AuthServiceError, CatalogServiceError,
    WishlistServiceError,
};

pub use app_services::AppServices;
pub use assignment_service::AssignmentService;
pub use auth_service::{AuthService, SignupRequest};
pub use catalog_service::CatalogService;
pub use delay::NetworkDelay;
pub use recommendation::{
    CharSumRecommender, HIGHLIGHT_COUNT, Recommender, RecommendationService,
};
pub use wishlist_service::WishlistService;
