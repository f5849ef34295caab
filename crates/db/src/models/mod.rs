//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod account;
pub mod category;
pub mod outfit;
pub mod recommendation;
pub mod tag;
pub mod wardrobe_item;
pub mod wardrobe_profile;
