//! Domain logic for the wardrobe service.
//!
//! Everything in this crate is pure: no database, no network. Handlers load
//! data through `wardrobe_db`, then hand it to the functions here.

pub mod advice;
pub mod age_profile;
pub mod error;
pub mod item;
pub mod profile;
pub mod query;
pub mod stats;
pub mod tag_shape;
pub mod types;
