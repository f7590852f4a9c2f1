//! Frontend Models
//!
//! Data structures matching the inventory service payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

/// Body of `POST /api/items`. Blank form fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<QuantityInput>,
}

/// Body of `PUT /api/items/{id}`.
///
/// Only keys present here are changed by the service; an absent key leaves
/// the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<QuantityInput>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.quantity.is_none()
    }
}

/// Quantity as typed into the form.
///
/// Integers go over the wire as numbers. Anything else is forwarded as the
/// raw string and the service decides whether to accept it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(i64),
    Raw(String),
}

impl QuantityInput {
    pub fn coerce(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => QuantityInput::Number(n),
            Err(_) => QuantityInput::Raw(input.to_string()),
        }
    }
}

/// `{ok, message, items, item, csv}` envelope every endpoint answers with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub item: Option<Item>,
    #[serde(default)]
    pub csv: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(n) => Ok(n),
        StringOrNumber::Float(f)
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
        {
            Ok(f as i64)
        }
        StringOrNumber::Float(f) => Err(serde::de::Error::custom(format!(
            "quantity is not a whole number in range: {}",
            f
        ))),
        StringOrNumber::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("quantity is not numeric: {:?}", s))),
    }
}
