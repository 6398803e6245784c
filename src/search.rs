use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::api::models::{SearchRequest, SearchResponse, SearchStatus};
use crate::config::CONFIG;
use crate::data_models::{Product, SITES};
use crate::error::SearchError;
use crate::matcher;

/// Fixed id carried by every response; searches are not tracked.
pub const SEARCH_ID: u32 = 1;

#[derive(Debug, Clone)]
pub struct SearchEngine {
    processing_delay: Duration,
    rng_seed: Option<u64>,
}

impl SearchEngine {
    pub fn new(processing_delay: Duration, rng_seed: Option<u64>) -> Self {
        Self {
            processing_delay,
            rng_seed,
        }
    }

    /// Create a SearchEngine using environment configuration
    pub fn from_config() -> Self {
        Self::new(
            Duration::from_millis(CONFIG.search_delay_ms),
            CONFIG.rng_seed,
        )
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let start = Instant::now();
        info!(query = %request.query, "search request");

        // Stand-in for vision extraction latency; yields to the runtime.
        tokio::time::sleep(self.processing_delay).await;

        let products = matcher::match_products(&request.query, &mut self.rng());
        build_response(&request.query, products, start).inspect_err(|e| {
            error!(query = %request.query, "search failed: {e}");
        })
    }
}

/// Sorts and checks the listings, then wraps them in a completed response.
/// Any invalid listing discards the whole set.
pub fn build_response(
    query: &str,
    products: Vec<Product>,
    started: Instant,
) -> Result<SearchResponse, SearchError> {
    let products = sorted_by_price(products);
    validate(&products)?;

    let search_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let total_found = products.len();
    info!(total_found, search_time_ms, "search completed");

    Ok(SearchResponse {
        search_id: SEARCH_ID,
        query: query.to_string(),
        status: SearchStatus::Completed,
        results: products,
        total_found,
        search_time_ms,
        sites_searched: SITES.iter().map(|site| site.domain().to_string()).collect(),
        cached_results: 0,
        fresh_results: total_found,
        error_message: None,
    })
}

/// Stable ascending sort; listings without a price sort as 0.
pub fn sorted_by_price(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price()));
    products
}

fn validate(products: &[Product]) -> Result<(), SearchError> {
    for product in products {
        if let Some(price) = product.price {
            if !price.is_finite() || price < 0.0 {
                return Err(SearchError::InvalidPrice {
                    id: product.id,
                    price,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::Site;

    fn product(id: u32, price: Option<f64>) -> Product {
        let mut p = Product::new(id, Site::Amazon, format!("item {id}"), 0.0, String::new(), 0.9);
        p.price = price;
        p
    }

    #[test]
    fn test_sorted_by_price_is_stable_and_treats_missing_as_zero() {
        let products = vec![
            product(1, Some(10.0)),
            product(2, None),
            product(3, Some(5.0)),
            product(4, Some(10.0)),
            product(5, Some(0.0)),
        ];
        let ids: Vec<u32> = sorted_by_price(products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(validate(&[product(1, Some(1.0)), product(2, None)]).is_ok());

        let err = validate(&[product(1, Some(1.0)), product(2, Some(-3.0))]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPrice { id: 2, .. }));

        assert!(validate(&[product(7, Some(f64::NAN))]).is_err());
    }

    #[test]
    fn test_build_response_discards_listings_with_invalid_price() {
        let products = vec![product(1, Some(20.0)), product(2, Some(-0.5))];
        let err = build_response("broken feed", products, Instant::now()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPrice { id: 2, .. }));
    }

    #[test]
    fn test_build_response_sorts_and_counts() {
        let products = vec![product(1, Some(20.0)), product(2, None), product(3, Some(4.0))];
        let response = build_response("lamp", products, Instant::now()).unwrap();

        let ids: Vec<u32> = response.results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(response.total_found, 3);
        assert_eq!(response.fresh_results, 3);
        assert_eq!(response.query, "lamp");
    }
}
