//! Placeholder catalog data.
//!
//! Everything the storefront shows is seeded from here; nothing is loaded
//! from or written back to a store.

use crate::catalog::{CatalogEntry, GalleryImage, ProductDetail, StockStatus};
use crate::money::{Currency, Money};
use crate::search::Suggestion;

/// Category facet values, in sidebar order.
pub const CATEGORIES: &[&str] = &[
    "Laptops",
    "Monitors",
    "Keyboards",
    "Audio",
    "Desktops",
    "Accessories",
];

/// Brand facet values, in sidebar order.
pub const BRANDS: &[&str] = &["Brand A", "Brand B", "Brand C", "Brand D"];

/// Currency every seeded price is quoted in.
pub const CURRENCY: Currency = Currency::USD;

fn usd(cents: i64) -> Money {
    Money::new(cents, CURRENCY)
}

fn placeholder(bg: &str, fg: &str, text: &str) -> String {
    format!("https://placehold.co/400x400/{bg}/{fg}?text={text}")
}

/// The product listing catalog.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1u32, "High-Performance Gaming Laptop", usd(149999))
            .with_image(placeholder("333", "FFF", "Laptop"))
            .with_rating(4.7, 120)
            .with_category("Laptops")
            .with_brand("Brand A")
            .best_seller(),
        CatalogEntry::new(2u32, "Ultra-Slim Business Ultrabook", usd(119900))
            .with_image(placeholder("555", "FFF", "Ultrabook"))
            .with_rating(4.5, 95)
            .with_category("Laptops")
            .with_brand("Brand B"),
        CatalogEntry::new(3u32, "27-inch 4K UHD Monitor", usd(44950))
            .with_image(placeholder("777", "FFF", "Monitor"))
            .with_rating(4.8, 210)
            .with_category("Monitors")
            .with_brand("Brand C"),
        CatalogEntry::new(4u32, "Ergonomic Mechanical Keyboard", usd(12999))
            .with_image(placeholder("999", "FFF", "Keyboard"))
            .with_rating(4.6, 350)
            .with_category("Keyboards")
            .with_brand("Brand D"),
        CatalogEntry::new(5u32, "Wireless Noise-Cancelling Headphones", usd(29900))
            .with_image(placeholder("AAA", "FFF", "Headphones"))
            .with_rating(4.9, 880)
            .with_category("Audio")
            .with_brand("Brand A")
            .best_seller(),
        CatalogEntry::new(6u32, "Entry-Level Gaming Laptop", usd(89999))
            .with_image(placeholder("CCC", "000", "Laptop"))
            .with_rating(4.3, 75)
            .with_category("Laptops")
            .with_brand("Brand B"),
        CatalogEntry::new(7u32, "Curved Ultrawide Monitor", usd(79900))
            .with_image(placeholder("EEE", "000", "Monitor"))
            .with_rating(4.7, 150)
            .with_category("Monitors")
            .with_brand("Brand C"),
        CatalogEntry::new(8u32, "Compact 60% Mechanical Keyboard", usd(9900))
            .with_image(placeholder("222", "FFF", "Keyboard"))
            .with_rating(4.4, 180)
            .with_category("Keyboards")
            .with_brand("Brand D"),
        CatalogEntry::new(9u32, "Premium Studio Headphones", usd(45000))
            .with_image(placeholder("444", "FFF", "Headphones"))
            .with_rating(4.8, 420)
            .with_category("Audio")
            .with_brand("Brand A"),
        CatalogEntry::new(10u32, "All-in-One Desktop PC", usd(135000))
            .with_image(placeholder("666", "FFF", "PC"))
            .with_rating(4.5, 65)
            .with_category("Desktops")
            .with_brand("Brand B"),
        CatalogEntry::new(11u32, "Portable 15-inch Monitor", usd(25000))
            .with_image(placeholder("888", "FFF", "Monitor"))
            .with_rating(4.2, 90)
            .with_category("Monitors")
            .with_brand("Brand C"),
        CatalogEntry::new(12u32, "RGB Gaming Mouse", usd(5999))
            .with_image(placeholder("BBB", "000", "Mouse"))
            .with_rating(4.6, 500)
            .with_category("Accessories")
            .with_brand("Brand D")
            .best_seller(),
    ]
}

/// Featured product cards on the home page.
pub fn featured() -> Vec<CatalogEntry> {
    let unsplash = |path: &str| format!("https://images.unsplash.com/{path}?q=80&w=800&auto=format&fit=crop");
    vec![
        CatalogEntry::new("prod1", "High-Performance Gaming Laptop with RGB Keyboard", usd(149999))
            .with_image(unsplash("photo-1593642632823-8f785ba67e45"))
            .with_rating(4.8, 1250)
            .best_seller(),
        CatalogEntry::new("prod2", "Sleek Ultrabook Pro for Business Professionals", usd(129999))
            .with_image(unsplash("photo-1517336714731-489689fd1ca8"))
            .with_rating(4.7, 980),
        CatalogEntry::new("prod3", "Noise-Cancelling Over-Ear Wireless Headphones", usd(29999))
            .with_image(unsplash("photo-1505740420928-5e560c06d30e"))
            .with_rating(4.9, 4500)
            .best_seller(),
        CatalogEntry::new("prod4", "27-inch 4K UHD IPS Monitor for Creatives", usd(49999))
            .with_image(unsplash("photo-1629899014521-4a49c4568c4a"))
            .with_rating(4.6, 750),
    ]
}

/// Lines the cart page starts with.
pub fn cart_lines() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            1u32,
            "High-Performance Gaming Laptop - 15.6\" QHD Display, 16GB RAM, 1TB SSD",
            usd(149999),
        )
        .with_image("https://placehold.co/400x400/E2E8F0/4A5568?text=Laptop"),
        CatalogEntry::new(2u32, "Ergonomic Wireless Mouse with RGB Lighting", usd(7999))
            .with_image("https://placehold.co/400x400/E2E8F0/4A5568?text=Mouse"),
    ]
}

/// The featured product page.
pub fn product_detail() -> ProductDetail {
    let entry = CatalogEntry::new("xg-pro", "Gaming Laptop XG-Pro", usd(149999))
        .with_rating(4.0, 121)
        .with_category("Laptops");

    let images = [
        ("photo-1603302576837-37561b2e2302?q=80&w=2068&auto=format&fit=crop", "Front view of a gaming laptop"),
        ("photo-1593642702821-c8da6771f0c6?q=80&w=1932&auto=format&fit=crop", "Angled view of the gaming laptop keyboard"),
        ("photo-1588872657578-7efd1f1555ed?q=80&w=1974&auto=format&fit=crop", "Close-up of the glowing keyboard"),
        ("photo-1555680202-c86f0e12f086?q=80&w=2070&auto=format&fit=crop", "Laptop open on a desk with a mouse"),
    ]
    .into_iter()
    .map(|(path, alt)| GalleryImage::new(format!("https://images.unsplash.com/{path}"), alt))
    .collect();

    ProductDetail {
        entry,
        description: "Unleash your gaming potential with the XG-Pro. Featuring the latest \
                      generation processor, top-tier graphics card, and a high-refresh-rate \
                      display, this laptop is engineered for victory. A sleek, durable chassis \
                      and customizable RGB keyboard complete the package."
            .to_string(),
        specifications: [
            ("CPU", "14th Gen Intel Core i9"),
            ("GPU", "NVIDIA GeForce RTX 4080"),
            ("RAM", "32GB DDR5"),
            ("Storage", "2TB NVMe SSD"),
            ("Display", "16-inch QHD+ 240Hz"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
        images,
        stock: StockStatus::InStock,
    }
}

/// Search-box suggestions, in dropdown order.
pub fn suggestions() -> Vec<Suggestion> {
    [
        ("gaming-laptop", "Gaming Laptop", "Laptops"),
        ("ultrabook", "Ultrabook", "Laptops"),
        ("macbook-pro", "MacBook Pro", "Laptops"),
        ("wireless-mouse", "Wireless Mouse", "Accessories"),
        ("mechanical-keyboard", "Mechanical Keyboard", "Accessories"),
        ("4k-monitor", "4K Monitor", "Monitors"),
        ("webcam", "Webcam", "Peripherals"),
        ("usb-c-hub", "USB-C Hub", "Accessories"),
        ("noise-cancelling-headphones", "Noise-Cancelling Headphones", "Audio"),
        ("smartphone", "Smartphone", "Mobile"),
        ("tablet", "Tablet", "Mobile"),
    ]
    .into_iter()
    .map(|(value, label, group)| Suggestion::new(value, label, group))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let entries = catalog();
        let ids: HashSet<_> = entries.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), entries.len());
        assert_eq!(entries.len(), 12);
    }

    #[test]
    fn test_catalog_facets_cover_entries() {
        for entry in catalog() {
            assert!(CATEGORIES.contains(&entry.category.as_str()), "{}", entry.category);
            assert!(BRANDS.contains(&entry.brand.as_str()), "{}", entry.brand);
        }
    }

    #[test]
    fn test_featured_seed() {
        let featured = featured();
        let ids: Vec<_> = featured.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["prod1", "prod2", "prod3", "prod4"]);
        assert_eq!(featured.iter().filter(|e| e.is_best_seller).count(), 2);
        assert_eq!(featured[1].price.display_grouped(), "$1,299.99");
    }

    #[test]
    fn test_detail_seed() {
        let detail = product_detail();
        assert_eq!(detail.images.len(), 4);
        assert_eq!(detail.entry.price.display_grouped(), "$1,499.99");
        assert_eq!(detail.specifications.len(), 5);
    }
}
