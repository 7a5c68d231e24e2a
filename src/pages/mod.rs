pub mod brands;
pub mod cart;
pub mod categories;
pub mod compatible_parts;
pub mod deals;
pub mod home;
pub mod marketplace;
pub mod mechanic_chat;
pub mod not_found;
pub mod order_tracker;
pub mod part_details;
pub mod profile;
pub mod support;
