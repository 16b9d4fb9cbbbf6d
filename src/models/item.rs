use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 100;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Core item entity. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

impl Item {
    /// Applies a partial update, leaving unsupplied fields as they were.
    /// Supplied fields are validated first; on error `self` is untouched.
    pub fn apply(&mut self, patch: &UpdateItem) -> AppResult<()> {
        patch.validate()?;
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation("price must be >= 0".to_string()));
    }
    Ok(())
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Full item body, used by both create and replace. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

impl CreateItem {
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl UpdateItem {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Filters applied by `ItemStore::list`. An unset field matches everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl ItemFilters {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name {
            if !item.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| item.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        if self.in_stock.is_some_and(|flag| item.in_stock != flag) {
            return false;
        }
        true
    }
}

/// Query string of `GET /items`. Kept flat so numeric and boolean values
/// deserialize straight from the urlencoded form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default, deserialize_with = "saturating_int")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "saturating_int")]
    pub limit: Option<i64>,
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl ListParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn filters(&self) -> ItemFilters {
        ItemFilters {
            name: self.name.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock: self.in_stock,
        }
    }
}

/// Reads an integer query value, saturating at the `i64` bounds instead of
/// rejecting it, so an oversized `skip` still yields an empty page.
fn saturating_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_saturating(&value).map_err(serde::de::Error::custom))
        .transpose()
}

fn parse_saturating(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid integer `{}`", value)),
        },
    }
}
