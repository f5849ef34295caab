//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod category_repo;
pub mod outfit_repo;
pub mod recommendation_repo;
pub mod tag_repo;
pub mod wardrobe_item_repo;
pub mod wardrobe_profile_repo;

pub use account_repo::AccountRepo;
pub use category_repo::CategoryRepo;
pub use outfit_repo::OutfitRepo;
pub use recommendation_repo::RecommendationRepo;
pub use tag_repo::TagRepo;
pub use wardrobe_item_repo::WardrobeItemRepo;
pub use wardrobe_profile_repo::WardrobeProfileRepo;
