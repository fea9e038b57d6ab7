use shared::domain::{Product, ProductId};

use crate::{
    filter::{distinct_categories, project, FilterCriteria},
    CatalogError,
};

/// The in-memory catalog plus its derived views. Every mutation goes
/// through a method here so `categories` and `filtered` never drift from
/// `products`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<String>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
}

impl CatalogState {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(|product| product.id).max()
    }

    /// Replaces the whole product list. Only the initial load calls this.
    pub(crate) fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
        self.categories = distinct_categories(&self.products);
        self.refresh();
    }

    pub(crate) fn prepend(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.contains(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        self.products.insert(0, product);
        self.sync_categories();
        self.refresh();
        Ok(())
    }

    pub(crate) fn replace(&mut self, product: Product) -> Result<(), CatalogError> {
        let slot = self
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or(CatalogError::ProductNotFound(product.id))?;
        *slot = product;
        self.sync_categories();
        self.refresh();
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        let removed = self.products.remove(index);
        self.sync_categories();
        self.refresh();
        Ok(removed)
    }

    pub(crate) fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Keeps known categories in place, drops ones no product uses any
    /// more, and appends newcomers at the end.
    fn sync_categories(&mut self) {
        let products = &self.products;
        self.categories
            .retain(|category| products.iter().any(|product| &product.category == category));
        for product in products {
            if !self.categories.contains(&product.category) {
                self.categories.push(product.category.clone());
            }
        }
    }

    fn refresh(&mut self) {
        self.filtered = project(&self.products, &self.criteria);
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
