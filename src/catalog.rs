//! Literal listings for the handful of products the demo knows by name.
//!
//! Entries are kept in a slice rather than a map: lookups walk them in order and
//! the first matching key wins, so the order below is observable behaviour.

use crate::data_models::Site;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing {
    pub name: &'static str,
    pub price: f64,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct CatalogEntry {
    /// Lowercase product phrase.
    pub key: &'static str,
    pub sites: &'static [(Site, &'static [Listing])],
}

impl CatalogEntry {
    /// True when the key, or any single word of it, occurs inside `normalized_query`.
    pub fn matches(&self, normalized_query: &str) -> bool {
        normalized_query.contains(self.key)
            || self
                .key
                .split_whitespace()
                .any(|word| normalized_query.contains(word))
    }

    pub fn listing_count(&self) -> usize {
        self.sites.iter().map(|(_, listings)| listings.len()).sum()
    }
}

const fn listing(name: &'static str, price: f64, url: &'static str) -> Listing {
    Listing { name, price, url }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "sony wh-1000xm5",
        sites: &[
            (
                Site::Amazon,
                &[
                    listing(
                        "Sony WH-1000XM5 Wireless Noise Canceling Headphones - Black",
                        349.99,
                        "https://amazon.com/dp/B09XS7JWHH",
                    ),
                    listing(
                        "Sony WH-1000XM5 Wireless Headphones - Silver",
                        359.99,
                        "https://amazon.com/dp/B09XS7JWHH",
                    ),
                ],
            ),
            (
                Site::BestBuy,
                &[
                    listing(
                        "Sony - WH-1000XM5 Wireless Noise Canceling Over-Ear Headphones - Black",
                        329.99,
                        "https://bestbuy.com/site/sony-wh-1000xm5/6505727.p",
                    ),
                    listing(
                        "Sony WH-1000XM5 Premium Noise Canceling Wireless Headphones",
                        399.99,
                        "https://bestbuy.com/site/sony-wh-1000xm5/6505728.p",
                    ),
                ],
            ),
            (
                Site::Walmart,
                &[
                    listing(
                        "Sony WH-1000XM5 Wireless Noise Canceling Headphones, Black",
                        298.00,
                        "https://walmart.com/ip/Sony-WH-1000XM5/395844662",
                    ),
                    listing(
                        "Sony WH1000XM5/B Premium Wireless Noise Canceling Headphones",
                        348.88,
                        "https://walmart.com/ip/Sony-WH-1000XM5-Premium/395844663",
                    ),
                ],
            ),
        ],
    },
    CatalogEntry {
        key: "iphone 15 pro",
        sites: &[
            (
                Site::Amazon,
                &[
                    listing(
                        "Apple iPhone 15 Pro (128GB) - Natural Titanium",
                        999.00,
                        "https://amazon.com/dp/B0CHX1W1XY",
                    ),
                    listing(
                        "Apple iPhone 15 Pro Max (256GB) - Blue Titanium",
                        1199.00,
                        "https://amazon.com/dp/B0CHX2RDGX",
                    ),
                ],
            ),
            (
                Site::BestBuy,
                &[
                    listing(
                        "Apple - iPhone 15 Pro 128GB - Natural Titanium (Verizon)",
                        999.99,
                        "https://bestbuy.com/site/apple-iphone-15-pro/6418599.p",
                    ),
                    listing(
                        "Apple iPhone 15 Pro 256GB - Blue Titanium (Unlocked)",
                        1099.99,
                        "https://bestbuy.com/site/apple-iphone-15-pro-256/6418600.p",
                    ),
                ],
            ),
            (
                Site::Walmart,
                &[
                    listing(
                        "Apple iPhone 15 Pro, 128GB, Natural Titanium - Unlocked",
                        999.00,
                        "https://walmart.com/ip/Apple-iPhone-15-Pro/5085896321",
                    ),
                    listing(
                        "iPhone 15 Pro Max 256GB Blue Titanium - T-Mobile",
                        1199.00,
                        "https://walmart.com/ip/iPhone-15-Pro-Max/5085896322",
                    ),
                ],
            ),
        ],
    },
    CatalogEntry {
        key: "macbook air m2",
        sites: &[
            (
                Site::Amazon,
                &[
                    listing(
                        "Apple 2022 MacBook Air Laptop with M2 chip: 13.6-inch Liquid Retina Display, 8GB RAM, 256GB SSD Storage",
                        1099.00,
                        "https://amazon.com/dp/B0B3C2R8MP",
                    ),
                    listing(
                        "Apple MacBook Air 13-inch M2 Chip 8GB RAM 512GB SSD - Midnight",
                        1299.00,
                        "https://amazon.com/dp/B0B3C57RQJ",
                    ),
                ],
            ),
            (
                Site::BestBuy,
                &[
                    listing(
                        "Apple - MacBook Air 13.6\" Laptop - Apple M2 chip - 8GB Memory - 256GB SSD - Starlight",
                        1099.99,
                        "https://bestbuy.com/site/apple-macbook-air/6509650.p",
                    ),
                    listing(
                        "MacBook Air 13\" M2 Chip 8GB RAM 512GB SSD - Space Gray",
                        1299.99,
                        "https://bestbuy.com/site/apple-macbook-air-512/6509651.p",
                    ),
                ],
            ),
            (
                Site::Walmart,
                &[
                    listing(
                        "Apple MacBook Air 13.6-inch M2 Chip 8GB RAM 256GB SSD Silver",
                        1049.00,
                        "https://walmart.com/ip/Apple-MacBook-Air-M2/1944190984",
                    ),
                    listing(
                        "Apple 2022 MacBook Air M2 Chip 8GB 512GB SSD 13.6\" Midnight",
                        1249.00,
                        "https://walmart.com/ip/MacBook-Air-M2-512GB/1944190985",
                    ),
                ],
            ),
        ],
    },
    CatalogEntry {
        key: "airpods pro",
        sites: &[
            (
                Site::Amazon,
                &[
                    listing(
                        "Apple AirPods Pro (2nd Generation) Wireless Earbuds with MagSafe Case",
                        249.00,
                        "https://amazon.com/dp/B0BDHWDR12",
                    ),
                    listing(
                        "Apple AirPods Pro 2nd Gen with USB-C Charging Case",
                        249.99,
                        "https://amazon.com/dp/B0CHWRXH8B",
                    ),
                ],
            ),
            (
                Site::BestBuy,
                &[
                    listing(
                        "Apple - AirPods Pro (2nd generation) with MagSafe Case (USB‑C) - White",
                        249.99,
                        "https://bestbuy.com/site/apple-airpods-pro/6418599.p",
                    ),
                    listing(
                        "Apple AirPods Pro 2nd Generation Wireless Earbuds - White",
                        229.99,
                        "https://bestbuy.com/site/apple-airpods-pro-2nd/6418600.p",
                    ),
                ],
            ),
            (
                Site::Walmart,
                &[
                    listing(
                        "Apple AirPods Pro (2nd Generation) with MagSafe Case USB-C",
                        239.00,
                        "https://walmart.com/ip/Apple-AirPods-Pro-2nd/1486319416",
                    ),
                    listing(
                        "Apple AirPods Pro 2nd Gen Wireless Earbuds with USB-C Case",
                        249.00,
                        "https://walmart.com/ip/AirPods-Pro-USB-C/1486319417",
                    ),
                ],
            ),
        ],
    },
    CatalogEntry {
        key: "nintendo switch",
        sites: &[
            (
                Site::Amazon,
                &[
                    listing(
                        "Nintendo Switch OLED Model w/ White Joy-Con",
                        349.99,
                        "https://amazon.com/dp/B098RKWHHZ",
                    ),
                    listing(
                        "Nintendo Switch Console with Neon Blue and Neon Red Joy‑Con",
                        299.99,
                        "https://amazon.com/dp/B07VGRJDFY",
                    ),
                ],
            ),
            (
                Site::BestBuy,
                &[
                    listing(
                        "Nintendo - Switch OLED Model with White Joy-Con",
                        349.99,
                        "https://bestbuy.com/site/nintendo-switch-oled/6464255.p",
                    ),
                    listing(
                        "Nintendo Switch Console Neon Blue/Red Joy-Con",
                        299.99,
                        "https://bestbuy.com/site/nintendo-switch/6364255.p",
                    ),
                ],
            ),
            (
                Site::Walmart,
                &[
                    listing(
                        "Nintendo Switch OLED Model Gaming Console White",
                        349.00,
                        "https://walmart.com/ip/Nintendo-Switch-OLED/606787621",
                    ),
                    listing(
                        "Nintendo Switch Console with Gray Joy‑Con Controllers",
                        299.88,
                        "https://walmart.com/ip/Nintendo-Switch-Gray/606787622",
                    ),
                ],
            ),
        ],
    },
];

#[test]
fn test_every_entry_covers_all_sites() {
    for entry in CATALOG {
        let sites: Vec<Site> = entry.sites.iter().map(|(site, _)| *site).collect();
        assert_eq!(sites, crate::data_models::SITES, "entry {}", entry.key);
        assert_eq!(entry.listing_count(), 6, "entry {}", entry.key);
    }
}

#[test]
fn test_entry_matches_key_or_any_word() {
    let sony = &CATALOG[0];
    assert!(sony.matches("sony wh-1000xm5"));
    assert!(sony.matches("cheap sony earbuds"));
    assert!(sony.matches("wh-1000xm5 case"));
    assert!(!sony.matches("bose quietcomfort"));
    assert!(!sony.matches(""));
}
