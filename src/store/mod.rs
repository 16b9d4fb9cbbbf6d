use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{CreateItem, Item, ItemFilters, UpdateItem, MAX_LIMIT};

/// One window of a filtered listing.
#[derive(Debug, Clone)]
pub struct ItemPage {
    pub items: Vec<Item>,
    /// Matches before `skip`/`limit` were applied.
    pub total: usize,
}

/// In-memory owner of every item and of the id counter.
///
/// `IndexMap` keeps insertion order, and ids only ever grow, so iteration is
/// ascending by id. Removal uses `shift_remove` to keep that order intact.
#[derive(Debug)]
pub struct ItemStore {
    items: IndexMap<u64, Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn create(&mut self, payload: CreateItem) -> AppResult<Item> {
        payload.validate()?;

        let id = self.next_id;
        self.next_id += 1;

        let item = Item {
            id,
            name: payload.name,
            price: payload.price,
            in_stock: payload.in_stock,
        };
        self.items.insert(id, item.clone());
        Ok(item)
    }

    pub fn get(&self, id: u64) -> AppResult<Item> {
        self.items.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    pub fn list(&self, filters: &ItemFilters, skip: i64, limit: i64) -> AppResult<ItemPage> {
        if skip < 0 {
            return Err(AppError::Validation("skip must be >= 0".to_string()));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        let matched: Vec<&Item> = self
            .items
            .values()
            .filter(|item| filters.matches(item))
            .collect();

        let items = matched
            .iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(limit as usize)
            .map(|item| (*item).clone())
            .collect();

        Ok(ItemPage {
            items,
            total: matched.len(),
        })
    }

    pub fn replace(&mut self, id: u64, payload: CreateItem) -> AppResult<Item> {
        let item = self.items.get_mut(&id).ok_or_else(|| not_found(id))?;
        payload.validate()?;

        item.name = payload.name;
        item.price = payload.price;
        item.in_stock = payload.in_stock;
        Ok(item.clone())
    }

    pub fn update(&mut self, id: u64, patch: &UpdateItem) -> AppResult<Item> {
        let item = self.items.get_mut(&id).ok_or_else(|| not_found(id))?;
        item.apply(patch)?;
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: u64) -> AppResult<()> {
        self.items
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Item {} not found", id))
}
