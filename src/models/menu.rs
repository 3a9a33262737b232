use serde::{Deserialize, Serialize};

/// A single entry on the breakfast menu.
///
/// Serialized exactly as `{id, name, price}`. Prices are whole currency
/// units; the store assigns ids and keeps them unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price: i32,
}

impl MenuItem {
    pub fn new(id: i32, name: impl Into<String>, price: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
