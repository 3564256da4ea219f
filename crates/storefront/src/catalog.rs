//! Product catalog.
//!
//! The catalog is an immutable, ordered sequence of products supplied at
//! startup. It is validated once at construction and never mutated; the
//! basket ledger resolves product ids against it before touching any state.

use std::collections::BTreeMap;

use garritas_core::{CurrencyCode, Price, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product has an empty name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    /// A product has a negative price.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    /// Products are priced in more than one currency.
    #[error("catalog mixes currencies ({0} and {1})")]
    MixedCurrencies(ProductId, ProductId),
}

/// A product in the store.
///
/// Immutable; identity is the `id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id, unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (path or asset key), resolved by the presentation layer.
    pub image: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// Immutable ordered product catalog with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: BTreeMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any product has a duplicate id, an empty
    /// name, or a negative price, or if the products are not all priced in
    /// the same currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        let mut first_priced: Option<(ProductId, CurrencyCode)> = None;

        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.price.amount.is_sign_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            match first_priced {
                None => first_priced = Some((product.id, product.price.currency_code)),
                Some((first_id, currency)) => {
                    if product.price.currency_code != currency {
                        return Err(CatalogError::MixedCurrencies(first_id, product.id));
                    }
                }
            }
        }

        Ok(Self { products, by_id })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }

    /// Whether the catalog contains the given id.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The catalog currency, if any products exist.
    #[must_use]
    pub fn currency(&self) -> Option<CurrencyCode> {
        self.products
            .first()
            .map(|product| product.price.currency_code)
    }

    /// The demo pet-supplies catalog the storefront ships with.
    ///
    /// Display names are English; the image keys are the Spanish asset
    /// names from the Garritas art pack and must stay as-is.
    #[must_use]
    pub fn demo() -> Self {
        let cop = |units| Price::from_units(units, CurrencyCode::COP);
        let products = vec![
            Product::new(1, "Dog collar", cop(10_000), "collar_perro.png"),
            Product::new(2, "Cat nail clippers", cop(15_000), "cortaunas.png"),
            Product::new(3, "Food bowl", cop(8_000), "plato_comida.png"),
            Product::new(4, "Recovery cone", cop(8_000), "collar_isabelino.png"),
            Product::new(5, "Flea treatment", cop(8_000), "antipulgas.png"),
            Product::new(6, "Pet brush", cop(8_000), "cepillo_para_mascotas.png"),
            Product::new(7, "Pet shampoo", cop(8_000), "shampoo_mascotas.png"),
            Product::new(8, "Cat food", cop(8_000), "concentrado_gato.png"),
        ];

        // The demo list has unique ids by construction, so the index can be
        // built without going through validation.
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();
        Self { products, by_id }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, price: i64) -> Product {
        Product::new(
            id,
            format!("product-{id}"),
            Price::from_units(price, CurrencyCode::COP),
            format!("product_{id}.png"),
        )
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::new(vec![product(3, 100), product(1, 200)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "product-1");

        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![product(1, 100), product(1, 200)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ProductId::new(1)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut bad = product(1, 100);
        bad.name = "   ".to_string();
        let err = Catalog::new(vec![bad]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyName(ProductId::new(1)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut bad = product(2, 100);
        bad.price = Price::from_units(-1, CurrencyCode::COP);
        let err = Catalog::new(vec![bad]).unwrap_err();
        assert_eq!(err, CatalogError::NegativePrice(ProductId::new(2)));
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let mut other = product(2, 100);
        other.price = Price::from_units(100, CurrencyCode::USD);
        let err = Catalog::new(vec![product(1, 100), other]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MixedCurrencies(ProductId::new(1), ProductId::new(2))
        );
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), None);
    }

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.currency(), Some(CurrencyCode::COP));
        assert!(catalog.contains(ProductId::new(1)));
        assert!(!catalog.contains(ProductId::new(9)));
    }
}
