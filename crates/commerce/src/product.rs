use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use telecart_core::{CommerceError, CommerceResult, ValueObject};

fn default_quantity() -> u32 {
    1
}

/// A purchasable item and its quantity.
///
/// Immutable once built; construct through [`Product::builder`]. The serde
/// representation uses the compact wire keys the collector expects
/// (`nm`/`id`/`qt`/`pr`/`attrs`).
///
/// Structural equality (`PartialEq`) compares every field. Whether two
/// products count as the *same cart entry* is a separate concern, decided
/// by the cart's [`EqualityComparator`](crate::comparator::EqualityComparator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "nm")]
    name: String,
    #[serde(rename = "id")]
    sku: String,
    #[serde(rename = "qt", default = "default_quantity")]
    quantity: u32,
    /// Unit price in smallest currency unit (e.g., cents).
    #[serde(rename = "pr", default, skip_serializing_if = "Option::is_none")]
    unit_price: Option<u64>,
    #[serde(rename = "attrs", default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl Product {
    /// Start building a product. Name and sku are required and must not be
    /// blank; everything else is optional.
    pub fn builder(name: impl Into<String>, sku: impl Into<String>) -> ProductBuilder {
        ProductBuilder {
            name: name.into(),
            sku: sku.into(),
            quantity: default_quantity(),
            unit_price: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price in smallest currency unit, if one was set.
    pub fn unit_price(&self) -> Option<u64> {
        self.unit_price
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Line total (quantity x unit price), if a price was set.
    pub fn total_price(&self) -> Option<u64> {
        self.unit_price
            .map(|price| price.saturating_mul(u64::from(self.quantity)))
    }

    /// Copy of this product with a different quantity.
    ///
    /// The cart uses this when merging duplicate entries; the original
    /// value stays untouched.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl ValueObject for Product {}

/// Builder for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    name: String,
    sku: String,
    quantity: u32,
    unit_price: Option<u64>,
    attributes: BTreeMap<String, String>,
}

impl ProductBuilder {
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Unit price in smallest currency unit (e.g., cents).
    pub fn unit_price(mut self, price: u64) -> Self {
        self.unit_price = Some(price);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> CommerceResult<Product> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::validation("name cannot be empty"));
        }

        if self.sku.trim().is_empty() {
            return Err(CommerceError::validation("SKU cannot be empty"));
        }

        Ok(Product {
            name: self.name,
            sku: self.sku,
            quantity: self.quantity,
            unit_price: self.unit_price,
            attributes: self.attributes,
        })
    }
}
