pub mod brand;
pub mod cart;
pub mod category;
pub mod chat;
pub mod deal;
pub mod money;
pub mod order;
pub mod part;
pub mod profile;
pub mod support;
pub mod wishlist;
