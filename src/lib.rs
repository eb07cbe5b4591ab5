pub mod config;
pub mod generator;
pub mod logger;
pub mod post;
pub mod render;
pub mod sheet;
pub mod sitemap;
pub mod writer;
mod test_data;
mod text_utils;
