//! Fabricates plausible listings for queries the catalog does not know.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data_models::{Product, SITES, Site, round2};

pub const PRODUCTS_PER_SITE: usize = 2;

/// Inclusive price band for a product category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

const fn range(min: f64, max: f64) -> PriceRange {
    PriceRange { min, max }
}

pub const DEFAULT_PRICE_RANGE: PriceRange = range(25.0, 500.0);

/// Scanned in order; the first keyword found in the query decides the band.
pub static CATEGORY_PRICES: &[(&str, PriceRange)] = &[
    ("headphones", range(50.0, 500.0)),
    ("phone", range(200.0, 1500.0)),
    ("laptop", range(400.0, 3000.0)),
    ("tablet", range(150.0, 1200.0)),
    ("watch", range(100.0, 800.0)),
    ("camera", range(300.0, 2000.0)),
    ("speaker", range(30.0, 400.0)),
    ("keyboard", range(20.0, 200.0)),
    ("mouse", range(15.0, 150.0)),
    ("monitor", range(150.0, 1000.0)),
    ("tv", range(200.0, 2000.0)),
    ("gaming", range(50.0, 600.0)),
    ("book", range(5.0, 50.0)),
    ("clothes", range(10.0, 200.0)),
    ("shoes", range(30.0, 300.0)),
];

const VARIATIONS: &[&str] = &[
    "Premium",
    "Pro",
    "Elite",
    "Ultra",
    "Max",
    "Plus",
    "Advanced",
    "Professional",
    "Deluxe",
    "Special Edition",
    "Limited Edition",
];

const COLORS: &[&str] = &["Black", "White", "Silver", "Blue", "Red", "Gray", "Gold"];

const SIZES: &[&str] = &["Compact", "Standard", "Large", "XL", "Mini"];

const AMAZON_ASIN_PREFIXES: &[&str] = &["B0", "B1"];

pub const JITTER_MIN: f64 = 0.9;
pub const JITTER_MAX: f64 = 1.1;
pub const CONFIDENCE_MIN: f64 = 0.85;
pub const CONFIDENCE_MAX: f64 = 0.98;

pub fn price_range_for(query: &str) -> PriceRange {
    let query = query.to_lowercase();
    CATEGORY_PRICES
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, prices)| *prices)
        .unwrap_or(DEFAULT_PRICE_RANGE)
}

/// Six listings, two per site, ids 1..=6 in emission order.
pub fn generate<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Vec<Product> {
    let display_query = query.trim();
    let slug = url_slug(query);
    let prices = price_range_for(query);

    let mut products = Vec::with_capacity(SITES.len() * PRODUCTS_PER_SITE);
    let mut product_id = 1;
    for site in SITES {
        for variant in 0..PRODUCTS_PER_SITE {
            let base_price = rng.gen_range(prices.min..=prices.max);
            let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
            let price = round2(base_price * site.price_multiplier() * jitter);

            let variation = VARIATIONS.choose(rng).copied().unwrap_or_default();
            let color = COLORS.choose(rng).copied().unwrap_or_default();
            let name = if variant == 0 {
                format!("{display_query} - {variation} {color}")
            } else {
                let size = SIZES.choose(rng).copied().unwrap_or_default();
                format!("{display_query} {variation} - {size} {color}")
            };
            let product_name = format!("{name} - {}", site.name_suffix());

            let url = product_url(site, &slug, rng);
            let confidence = round2(rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX));

            products.push(Product::new(
                product_id,
                site,
                product_name,
                price,
                url,
                confidence,
            ));
            product_id += 1;
        }
    }
    products
}

/// Path segment derived from the raw query: lowercased, spaces to dashes, `&` spelled out.
pub fn url_slug(query: &str) -> String {
    query.to_lowercase().replace(' ', "-").replace('&', "and")
}

fn product_url<R: Rng + ?Sized>(site: Site, slug: &str, rng: &mut R) -> String {
    match site {
        Site::Amazon => format!(
            "https://amazon.com/dp/{}{}",
            AMAZON_ASIN_PREFIXES.choose(rng).copied().unwrap_or_default(),
            rng.gen_range(100_000..=999_999)
        ),
        Site::BestBuy => format!(
            "https://bestbuy.com/site/{slug}/{}.p",
            rng.gen_range(6_000_000..=6_999_999)
        ),
        Site::Walmart => format!(
            "https://walmart.com/ip/{slug}/{}",
            rng.gen_range(100_000_000..=999_999_999)
        ),
    }
}
