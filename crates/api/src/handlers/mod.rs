pub mod account;
pub mod categories;
pub mod chat;
pub mod debug;
pub mod form;
pub mod form_options;
pub mod items;
pub mod outfits;
pub mod profiles;
pub mod recommendations;
pub mod tags;
pub mod weather;
