pub mod category_grid;
pub mod featured_products;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod product_card;
pub mod search_bar;
pub mod star_rating;
pub mod theme_toggle;
pub mod toast;
pub mod view_toggle;
