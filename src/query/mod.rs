//! Product selection: typed filters and textual filter tokens.

pub mod filter;
pub mod tokens;

pub use filter::{get_products, ProductFilter};
pub use tokens::FilterTokens;
