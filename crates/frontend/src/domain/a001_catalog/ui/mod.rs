pub mod grid;
pub mod page;
pub mod sidebar;

pub use page::CatalogPage;
