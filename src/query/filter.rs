use serde::{Deserialize, Serialize};

use crate::errors::{Result, WarehouseError};
use crate::warehouse::{CategoryId, Product, Sex, Size, Warehouse};

/// Declarative product selection.
///
/// Groups combine with AND. Inside a group any listed value may match (OR),
/// except `categories`, where every listed category must be among the
/// product's ancestor-inclusive categories. `None` or an empty list leaves
/// the group unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Product id starts with any of these prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefixes: Option<Vec<String>>,
    /// Product name equals any of these names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// Product belongs to all of these categories, directly or via a parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryId>>,
    /// Product color equals any of these, ignoring case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<Size>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexes: Option<Vec<Sex>>,
}

impl ProductFilter {
    /// Filter that matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_id_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    pub fn with_sexes(mut self, sexes: impl IntoIterator<Item = Sex>) -> Self {
        self.sexes = Some(sexes.into_iter().collect());
        self
    }

    /// Fails when the filter names a category the warehouse does not know.
    pub fn validate(&self, warehouse: &Warehouse) -> Result<()> {
        if let Some(missing) = active(&self.categories)
            .iter()
            .find(|id| warehouse.category(**id).is_none())
        {
            return Err(WarehouseError::InvalidFilterValue {
                field: "category",
                value: missing.to_string(),
                suggestion: None,
            });
        }
        Ok(())
    }

    /// Checks a single product; category ids are assumed validated.
    pub fn matches(&self, warehouse: &Warehouse, product: &Product) -> bool {
        let prefixes = active(&self.id_prefixes);
        if !prefixes.is_empty()
            && !prefixes
                .iter()
                .any(|prefix| product.id.as_str().starts_with(prefix.as_str()))
        {
            return false;
        }

        let names = active(&self.names);
        if !names.is_empty() && !names.iter().any(|name| name == &product.name) {
            return false;
        }

        let colors = active(&self.colors);
        if !colors.is_empty() {
            let color = product.color.to_lowercase();
            if !colors.iter().any(|candidate| candidate.to_lowercase() == color) {
                return false;
            }
        }

        let sizes = active(&self.sizes);
        if !sizes.is_empty() && !sizes.contains(&product.size) {
            return false;
        }

        let sexes = active(&self.sexes);
        if !sexes.is_empty() && !sexes.contains(&product.sex) {
            return false;
        }

        let categories = active(&self.categories);
        if !categories.is_empty() {
            let owned = warehouse.product_categories(product);
            if !categories.iter().all(|id| owned.contains(id)) {
                return false;
            }
        }

        true
    }
}

fn active<T>(group: &Option<Vec<T>>) -> &[T] {
    group.as_deref().unwrap_or(&[])
}

/// Products satisfying `filter`, ordered by product id.
pub fn get_products<'a>(warehouse: &'a Warehouse, filter: &ProductFilter) -> Result<Vec<&'a Product>> {
    filter.validate(warehouse)?;
    let products: Vec<_> = warehouse
        .products()
        .filter(|product| filter.matches(warehouse, product))
        .collect();
    tracing::debug!(matched = products.len(), "resolved product filter");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use crate::warehouse::{Category, WarehouseBuilder};

    fn warehouse() -> Warehouse {
        let mut builder = WarehouseBuilder::new(CurrencyCode::new("PLN"));
        builder.add_category(Category::new(1, "Clothes"));
        builder.add_category(Category::new(4, "Hoodies").with_parent(1));
        builder.add_category(Category::new(13, "Harry Potter"));
        builder.add_product(
            Product::new("BHaP01MWhi", "Harry Potter hoodie", Size::Xs, Sex::Man, "white")
                .with_categories([4, 13]),
        );
        builder.add_product(
            Product::new("BHaP01WWhi", "Harry Potter hoodie", Size::S, Sex::Woman, "White")
                .with_categories([4]),
        );
        builder.add_product(
            Product::new("BLeZ01URed", "Zelda hoodie", Size::L, Sex::Unisex, "red")
                .with_categories([4]),
        );
        builder.add_product(Product::new("TShirt01", "Plain tee", Size::M, Sex::Man, "black"));
        builder.build().expect("valid warehouse")
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn unconstrained_filter_returns_everything() {
        let wh = warehouse();
        assert_eq!(get_products(&wh, &ProductFilter::all()).unwrap().len(), 4);
    }

    #[test]
    fn groups_combine_with_and_values_with_or() {
        let wh = warehouse();
        let filter = ProductFilter::all()
            .with_colors(["white", "red"])
            .with_sizes([Size::Xs, Size::L])
            .with_sexes([Sex::Man]);
        assert_eq!(ids(&get_products(&wh, &filter).unwrap()), ["BHaP01MWhi"]);

        let filter = ProductFilter::all()
            .with_id_prefixes(["B"])
            .with_names(["Harry Potter hoodie"])
            .with_colors(["WHITE"]);
        assert_eq!(
            ids(&get_products(&wh, &filter).unwrap()),
            ["BHaP01MWhi", "BHaP01WWhi"]
        );
    }

    #[test]
    fn categories_require_every_listed_ancestor() {
        let wh = warehouse();
        let filter = ProductFilter::all().with_categories([CategoryId(1), CategoryId(13)]);
        assert_eq!(ids(&get_products(&wh, &filter).unwrap()), ["BHaP01MWhi"]);

        let filter = ProductFilter::all().with_categories([CategoryId(1)]);
        assert_eq!(get_products(&wh, &filter).unwrap().len(), 3);
    }

    #[test]
    fn unmatched_values_give_empty_set() {
        let wh = warehouse();
        let filter = ProductFilter::all()
            .with_colors(["purple", "yellow"])
            .with_sexes([Sex::Woman, Sex::Man]);
        assert!(get_products(&wh, &filter).unwrap().is_empty());
    }

    #[test]
    fn empty_group_is_unconstrained() {
        let wh = warehouse();
        let filter = ProductFilter::all().with_colors(Vec::<String>::new());
        assert_eq!(get_products(&wh, &filter).unwrap().len(), 4);
    }

    #[test]
    fn unknown_category_is_invalid_filter_value() {
        let wh = warehouse();
        let filter = ProductFilter::all().with_categories([CategoryId(77)]);
        let err = get_products(&wh, &filter).expect_err("unknown category");
        assert!(matches!(
            err,
            WarehouseError::InvalidFilterValue { field: "category", .. }
        ));
    }
}
