/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::models::common::{Data, RelationshipItem, RelationshipItems, Timestamps};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single product wrapped in the response envelope
pub type ProductData = Data<Product>;

/// A list of products wrapped in the response envelope
pub type ProductsData = Data<Vec<Product>>;

/// Maps variation ids to option ids to the id of the child product
pub type ProductVariationMatrix = BTreeMap<String, BTreeMap<String, String>>;

/// Product in the catalogue
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    /// Server assigned identifier, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource type, always "product"
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub description: String,
    /// Whether the store tracks stock for this product
    #[serde(default)]
    pub manage_stock: bool,
    /// "live" or "draft"
    #[serde(default)]
    pub status: String,
    /// "physical" or "digital"
    #[serde(default)]
    pub commodity_type: String,
    /// One price per currency
    #[serde(default)]
    pub price: Vec<ProductPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProductMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<ProductWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<ProductRelationships>,
    /// Named dimensions such as width or depth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<BTreeMap<String, Measurement>>,
}

impl Product {
    /// Creates a product ready to be sent to the API
    pub fn new(name: impl Into<String>, sku: impl Into<String>) -> Self {
        let sku = sku.into();
        Self {
            type_: "product".to_string(),
            name: name.into(),
            slug: sku.clone(),
            sku,
            status: "draft".to_string(),
            commodity_type: "physical".to_string(),
            ..Self::default()
        }
    }

    /// Adds a price in the given currency
    pub fn with_price(mut self, amount: i64, currency: impl Into<String>, includes_tax: bool) -> Self {
        self.price.push(ProductPrice {
            amount,
            currency: currency.into(),
            includes_tax,
        });
        self
    }
}

/// Price of a product in one currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductPrice {
    /// Amount in the currency's minor unit
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub includes_tax: bool,
}

/// Single dimension of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Measurement {
    #[serde(default)]
    pub measurement: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub value: f64,
}

/// Server maintained metadata of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<ProductStock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<ProductVariation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_matrix: Option<ProductVariationMatrix>,
}

/// Stock level of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductStock {
    #[serde(default)]
    pub level: i64,
    /// "in-stock" or "out-stock"
    #[serde(default)]
    pub availability: String,
}

/// Variation of a base product, e.g. size or colour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductVariation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<ProductVariationOption>,
}

/// Option of a variation, e.g. "Large"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductVariationOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Weight of a product in several units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductWeight {
    #[serde(rename = "g", default)]
    pub grams: i64,
    #[serde(rename = "kg", default)]
    pub kilograms: f64,
    #[serde(rename = "lb", default)]
    pub pounds: f64,
    #[serde(rename = "oz", default)]
    pub ounces: f64,
}

/// Resources a product is related to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<RelationshipItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<RelationshipItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<RelationshipItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<RelationshipItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<RelationshipItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<RelationshipItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RelationshipItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<RelationshipItems>,
}
