use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductId, Rating};

/// Body returned by `POST /products`. Only the id is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatedProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
}

impl CreatedProduct {
    /// A zero id is treated the same as a missing one.
    pub fn assigned_id(&self) -> Option<ProductId> {
        self.id.filter(|id| id.0 != 0)
    }
}

/// Body returned by `PUT /products/{id}`. Every field is optional because
/// the service echoes back whatever it accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl RemoteProduct {
    /// Layers the server's editable fields over `local`. `id` and `rating`
    /// in the response are ignored.
    pub fn merge_into(self, local: &mut Product) {
        if let Some(title) = self.title {
            local.title = title;
        }
        if let Some(price) = self.price {
            local.price = price;
        }
        if let Some(description) = self.description {
            local.description = description;
        }
        if let Some(category) = self.category {
            local.category = category;
        }
        if let Some(image) = self.image {
            local.image = Some(image);
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
