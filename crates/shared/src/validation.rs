//! Field checks for the add/edit form. A form only turns into a
//! [`ProductDraft`] once every check passes.

use url::Url;

use crate::{
    domain::{Product, ProductDraft},
    error::{Field, FieldErrors},
};

/// Raw, as-typed form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Price => &self.price,
            Field::Description => &self.description,
            Field::Category => &self.category,
            Field::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Price => self.price = value,
            Field::Description => self.description = value,
            Field::Category => self.category = value,
            Field::Image => self.image = value,
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(Field::Title, "Title is required");
        }

        let price = parse_price(&self.price);
        if price.is_none() {
            errors.push(Field::Price, "Valid price is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(Field::Description, "Description is required");
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(Field::Category, "Category is required");
        }

        let image = self.image.trim();
        if !image.is_empty() && !is_valid_url(image) {
            errors.push(Field::Image, "Valid URL is required");
        }

        match price {
            Some(price) if errors.is_empty() => Ok(ProductDraft {
                title: title.to_string(),
                price,
                description: description.to_string(),
                category: category.to_string(),
                image: (!image.is_empty()).then(|| image.to_string()),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
