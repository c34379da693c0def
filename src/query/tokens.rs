use strsim::levenshtein;

use super::filter::ProductFilter;
use crate::errors::{Result, WarehouseError};
use crate::warehouse::{Sex, Size, Warehouse};

const SUGGESTION_DISTANCE: usize = 3;

/// Raw, user-entered filter values before they are resolved against a warehouse.
///
/// Empty lists mean "no constraint", mirroring [`ProductFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTokens {
    pub id_prefixes: Vec<String>,
    pub names: Vec<String>,
    pub categories: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub sexes: Vec<String>,
}

impl FilterTokens {
    /// Splits a comma separated list, trimming entries and dropping blanks.
    pub fn parse_list(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn resolve(&self, warehouse: &Warehouse) -> Result<ProductFilter> {
        let mut filter = ProductFilter::all();

        if !self.id_prefixes.is_empty() {
            filter = filter.with_id_prefixes(self.id_prefixes.iter().map(|p| p.trim()));
        }
        if !self.names.is_empty() {
            filter = filter.with_names(self.names.iter().map(|n| n.trim()));
        }
        if !self.colors.is_empty() {
            filter = filter.with_colors(self.colors.iter().map(|c| c.trim()));
        }

        if !self.categories.is_empty() {
            let known: Vec<&str> = warehouse.categories().map(|c| c.name.as_str()).collect();
            let mut ids = Vec::with_capacity(self.categories.len());
            for token in &self.categories {
                match warehouse.category_by_name(token) {
                    Some(category) => ids.push(category.id),
                    None => return Err(invalid("category", token, &known)),
                }
            }
            filter = filter.with_categories(ids);
        }

        if !self.sizes.is_empty() {
            let known: Vec<&str> = Size::ALL.iter().map(|s| s.label()).collect();
            let sizes = self
                .sizes
                .iter()
                .map(|token| Size::from_label(token).ok_or_else(|| invalid("size", token, &known)))
                .collect::<Result<Vec<_>>>()?;
            filter = filter.with_sizes(sizes);
        }

        if !self.sexes.is_empty() {
            let known: Vec<&str> = Sex::ALL.iter().map(|s| s.label()).collect();
            let sexes = self
                .sexes
                .iter()
                .map(|token| Sex::from_label(token).ok_or_else(|| invalid("sex", token, &known)))
                .collect::<Result<Vec<_>>>()?;
            filter = filter.with_sexes(sexes);
        }

        Ok(filter)
    }
}

fn invalid(field: &'static str, token: &str, known: &[&str]) -> WarehouseError {
    let needle = token.trim().to_lowercase();
    let suggestion = known
        .iter()
        .map(|candidate| (levenshtein(&candidate.to_lowercase(), &needle), *candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string());
    WarehouseError::InvalidFilterValue {
        field,
        value: token.trim().to_string(),
        suggestion,
    }
}
