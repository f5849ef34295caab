//! Clients for the services the wardrobe API talks to.
//!
//! - [`weather`] -- current-conditions lookup (OpenWeather).
//! - [`advice`] -- outfit advice through a chat-completions endpoint.
//! - [`storage`] -- object storage for item images and profile pictures.

pub mod advice;
pub mod storage;
pub mod weather;
