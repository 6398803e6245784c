use chrono::Utc;
use serde::Serialize;

/// The retailers every search covers, in the order results are emitted.
pub const SITES: [Site; 3] = [Site::Amazon, Site::BestBuy, Site::Walmart];

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    #[serde(rename = "amazon.com")]
    Amazon,
    #[serde(rename = "bestbuy.com")]
    BestBuy,
    #[serde(rename = "walmart.com")]
    Walmart,
}

impl Site {
    pub fn domain(&self) -> &'static str {
        match self {
            Site::Amazon => "amazon.com",
            Site::BestBuy => "bestbuy.com",
            Site::Walmart => "walmart.com",
        }
    }

    /// Factor applied to a synthesized base price to mimic retailer pricing.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Site::Amazon => 1.0,
            Site::BestBuy => 1.05,
            Site::Walmart => 0.95,
        }
    }

    pub fn name_suffix(&self) -> &'static str {
        match self {
            Site::Amazon => "Amazon's Choice",
            Site::BestBuy => "Best Buy Exclusive",
            Site::Walmart => "Great Value",
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.domain())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub site: Site,
    pub product_name: String,
    pub price: Option<f64>,
    pub currency: String,
    pub product_url: Option<String>,
    pub image_url: Option<String>,
    pub extracted_at: String,
    pub extraction_confidence: Option<f64>,
}

impl Product {
    pub fn new(
        id: u32,
        site: Site,
        product_name: String,
        price: f64,
        product_url: String,
        extraction_confidence: f64,
    ) -> Product {
        Product {
            id,
            site,
            product_name,
            price: Some(price),
            currency: DEFAULT_CURRENCY.to_string(),
            product_url: Some(product_url),
            image_url: None, // no listing ever carries an image
            extracted_at: utc_timestamp(),
            extraction_confidence: Some(extraction_confidence),
        }
    }

    /// Price used for ordering; a missing price sorts as free.
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Current UTC time as an ISO-8601 string without offset, microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Rounds to cents the way listing prices and confidences are published.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn test_round2() {
    assert_eq!(round2(12.345_6), 12.35);
    assert_eq!(round2(0.854), 0.85);
    assert_eq!(round2(298.0), 298.0);
}

#[test]
fn test_site_serializes_as_domain() {
    for site in SITES {
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, format!("\"{}\"", site.domain()));
    }
}
