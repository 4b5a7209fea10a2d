pub mod dto;

pub use dto::{
    capitalize_first, products_path, Category, PageQuery, Product, ProductListResponse,
};
