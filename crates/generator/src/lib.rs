pub mod pages;
pub mod sitemap;

pub use sitemap::{
    BASE_ORIGIN, DEFAULT_SITEMAP_PATH, default_routes, effective_routes, sitemap_xml,
    write_default_sitemap, write_sitemap,
};
