//! Warehouse domain models and the validating bulk-load builder.

pub mod category;
pub mod operation;
pub mod product;
#[allow(clippy::module_inception)]
pub mod warehouse;

pub use category::{Category, CategoryId};
pub use operation::{Operation, OperationId, OperationKind};
pub use product::{Product, ProductId, Sex, Size};
pub use warehouse::{Warehouse, WarehouseBuilder};
