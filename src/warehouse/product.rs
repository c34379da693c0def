use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Garment sizes, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    OneSize,
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Size {
    pub const ALL: [Size; 6] = [Size::OneSize, Size::Xs, Size::S, Size::M, Size::L, Size::Xl];

    pub fn label(self) -> &'static str {
        match self {
            Size::OneSize => "ONE_SIZE",
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Size> {
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Unisex,
    Woman,
    Man,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Unisex, Sex::Woman, Sex::Man];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Unisex => "UNISEX",
            Sex::Woman => "WOMAN",
            Sex::Man => "MAN",
        }
    }

    pub fn from_label(label: &str) -> Option<Sex> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stock keeping unit. Category ids are the directly assigned ones; the
/// full ancestor-inclusive set is resolved through the warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub size: Size,
    pub sex: Sex,
    pub color: String,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    /// Delivery lead time in days.
    #[serde(default)]
    pub delivery_time: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: Size,
        sex: Sex,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            size,
            sex,
            color: color.into(),
            category_ids: Vec::new(),
            delivery_time: 0.0,
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = u32>) -> Self {
        self.category_ids = categories.into_iter().map(CategoryId).collect();
        self
    }
}
