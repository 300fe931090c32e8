//! Product catalog - the in-memory mapping from product name to its details.
//!
//! The catalog lives only as long as the process. Entries are keyed by name and
//! kept in insertion order, which is the order the shop menu lists them in.

/// A product offered in the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique name, used both as the menu label and as the lookup key
    pub name: String,
    /// Free-text description shown in full on the product card
    pub description: String,
    /// Optional image URL for the product card
    pub image: Option<String>,
}

impl Product {
    /// Creates a product from its three fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image,
        }
    }
}

/// Insertion-ordered collection of products, unique by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Inserts a product, replacing any entry with the same name in place.
    ///
    /// Returns `true` when an existing entry was overwritten.
    pub fn upsert(&mut self, product: Product) -> bool {
        if let Some(existing) = self.products.iter_mut().find(|p| p.name == product.name) {
            *existing = product;
            true
        } else {
            self.products.push(product);
            false
        }
    }

    /// Looks a product up by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Iterates products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of distinct product names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no product has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("anything").is_none());
    }

    #[test]
    fn test_distinct_names_are_all_kept() {
        let mut catalog = Catalog::new();
        for name in ["Sword", "Shield", "Potion"] {
            assert!(!catalog.upsert(Product::new(name, format!("{name} desc"), None)));
        }

        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Sword", "Shield", "Potion"]);
        assert_eq!(catalog.get("Shield").unwrap().description, "Shield desc");
    }

    #[test]
    fn test_readding_overwrites_in_place() {
        let mut catalog = Catalog::new();
        catalog.upsert(Product::new("Sword", "old", Some("http://img/old.png".to_string())));
        catalog.upsert(Product::new("Shield", "round", None));

        let replaced = catalog.upsert(Product::new("Sword", "new", None));

        assert!(replaced);
        assert_eq!(catalog.len(), 2);
        let sword = catalog.get("Sword").unwrap();
        assert_eq!(sword.description, "new");
        assert!(sword.image.is_none());
        assert_eq!(catalog.iter().next().unwrap().name, "Sword");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.upsert(Product::new("Sword", "sharp", None));
        assert!(catalog.get("sword").is_none());
    }
}
