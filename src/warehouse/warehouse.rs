use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    category::{Category, CategoryId},
    operation::{Operation, OperationId},
    product::{Product, ProductId},
};
use crate::config::AnalysisConfig;
use crate::currency::CurrencyCode;
use crate::errors::{Result, WarehouseError};

/// Read-only snapshot of categories, products and operations.
///
/// Only [`WarehouseBuilder::build`] creates one, so every cross reference
/// inside is known to resolve.
#[derive(Debug, Clone, Serialize)]
pub struct Warehouse {
    currency: CurrencyCode,
    categories: BTreeMap<CategoryId, Category>,
    products: BTreeMap<ProductId, Product>,
    operations: BTreeMap<OperationId, Operation>,
}

impl Warehouse {
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.trim().to_lowercase();
        self.categories
            .values()
            .find(|category| category.name.to_lowercase() == needle)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// All operations in id order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn operations_for<'a>(
        &'a self,
        product_id: &'a ProductId,
    ) -> impl Iterator<Item = &'a Operation> + 'a {
        self.operations
            .values()
            .filter(move |operation| &operation.product_id == product_id)
    }

    /// Date of the most recent operation of any kind.
    pub fn last_operation_date(&self) -> Option<NaiveDate> {
        self.operations.values().map(|operation| operation.date).max()
    }

    /// The category itself followed by its transitive parents.
    pub fn ancestors(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut chain = Vec::new();
        let mut visited = BTreeSet::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if !visited.insert(current) {
                break;
            }
            let Some(category) = self.categories.get(&current) else {
                break;
            };
            chain.push(current);
            cursor = category.parent_id;
        }
        chain
    }

    /// Union of the ancestor sets of the product's assigned categories.
    pub fn product_categories(&self, product: &Product) -> BTreeSet<CategoryId> {
        product
            .category_ids
            .iter()
            .flat_map(|id| self.ancestors(*id))
            .collect()
    }
}

/// Collects entities during a bulk load and validates them into a [`Warehouse`].
#[derive(Debug, Default)]
pub struct WarehouseBuilder {
    currency: CurrencyCode,
    categories: Vec<Category>,
    products: Vec<Product>,
    operations: Vec<Operation>,
}

impl WarehouseBuilder {
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Builder priced in the configured currency.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.currency.clone())
    }

    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id.clone();
        self.products.push(product);
        id
    }

    pub fn add_operation(&mut self, operation: Operation) -> OperationId {
        let id = operation.id;
        self.operations.push(operation);
        id
    }

    pub fn build(self) -> Result<Warehouse> {
        let mut categories = BTreeMap::new();
        for category in self.categories {
            let id = category.id;
            if categories.insert(id, category).is_some() {
                return Err(WarehouseError::DuplicateId {
                    kind: "category",
                    id: id.to_string(),
                });
            }
        }
        for category in categories.values() {
            if let Some(parent) = category.parent_id {
                if !categories.contains_key(&parent) {
                    return Err(WarehouseError::InvalidReference(format!(
                        "category {} names missing parent {}",
                        category.id, parent
                    )));
                }
            }
        }
        for id in categories.keys() {
            ensure_acyclic(&categories, *id)?;
        }

        let mut products = BTreeMap::new();
        for product in self.products {
            if let Some(missing) = product
                .category_ids
                .iter()
                .find(|id| !categories.contains_key(id))
            {
                return Err(WarehouseError::InvalidReference(format!(
                    "product {} names missing category {}",
                    product.id, missing
                )));
            }
            let id = product.id.clone();
            if products.insert(id.clone(), product).is_some() {
                return Err(WarehouseError::DuplicateId {
                    kind: "product",
                    id: id.to_string(),
                });
            }
        }

        let mut operations = BTreeMap::new();
        for operation in self.operations {
            if !products.contains_key(&operation.product_id) {
                return Err(WarehouseError::InvalidReference(format!(
                    "operation {} names missing product {}",
                    operation.id, operation.product_id
                )));
            }
            if operation.quantity == 0 {
                return Err(WarehouseError::InvalidQuantity(operation.id));
            }
            if operation.unit_price.currency() != &self.currency {
                return Err(WarehouseError::CurrencyMismatch {
                    expected: self.currency.to_string(),
                    found: operation.unit_price.currency().to_string(),
                });
            }
            let id = operation.id;
            if operations.insert(id, operation).is_some() {
                return Err(WarehouseError::DuplicateId {
                    kind: "operation",
                    id: id.to_string(),
                });
            }
        }

        tracing::debug!(
            categories = categories.len(),
            products = products.len(),
            operations = operations.len(),
            "warehouse snapshot built"
        );

        Ok(Warehouse {
            currency: self.currency,
            categories,
            products,
            operations,
        })
    }
}

fn ensure_acyclic(categories: &BTreeMap<CategoryId, Category>, start: CategoryId) -> Result<()> {
    let mut visited = BTreeSet::new();
    let mut cursor = Some(start);
    while let Some(current) = cursor {
        if !visited.insert(current) {
            return Err(WarehouseError::CategoryCycle(start));
        }
        cursor = categories
            .get(&current)
            .and_then(|category| category.parent_id);
    }
    Ok(())
}
