use rand::Rng;
use tracing::debug;

use crate::catalog::{CATALOG, CatalogEntry};
use crate::data_models::Product;
use crate::generator;

/// Trimmed, lowercased form used for every catalog comparison.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// First catalog entry, in table order, whose key or any key word occurs in the query.
pub fn find_entry(query: &str) -> Option<&'static CatalogEntry> {
    let normalized = normalize_query(query);
    CATALOG.iter().find(|entry| entry.matches(&normalized))
}

/// Catalog listings when the query names a known product, synthetic ones otherwise.
pub fn match_products<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Vec<Product> {
    match find_entry(query) {
        Some(entry) => {
            debug!(key = entry.key, "query matched catalog entry");
            catalog_products(entry)
        }
        None => {
            debug!("no catalog entry matched, generating listings");
            generator::generate(query, rng)
        }
    }
}

pub fn catalog_products(entry: &CatalogEntry) -> Vec<Product> {
    let mut products = Vec::with_capacity(entry.listing_count());
    let mut product_id = 1;
    for (site, listings) in entry.sites {
        for listing in listings.iter() {
            products.push(Product::new(
                product_id,
                *site,
                listing.name.to_string(),
                listing.price,
                listing.url.to_string(),
                catalog_confidence(product_id),
            ));
            product_id += 1;
        }
    }
    products
}

/// Cycles through 0.90, 0.92 .. 0.98 and wraps back towards 0.88.
fn catalog_confidence(product_id: u32) -> f64 {
    0.88 + (f64::from(product_id) * 0.02) % 0.12
}
