//! Product listing command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::Cart;
use storefront_commerce::catalog::{self, seed, CatalogEntry, ADDED_TO_CART_TITLE};
use storefront_commerce::listing::{Facet, ListingPage, ListingState, SortOrder};
use storefront_commerce::ProductId;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{best_seller_badge, title_width};

#[derive(Serialize)]
struct BrowseReport<'a> {
    summary: String,
    sort: SortOrder,
    #[serde(flatten)]
    page: ListingPage<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<Vec<Facet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    added: Option<AddedToCart>,
}

#[derive(Serialize)]
struct FeaturedReport<'a> {
    featured: &'a [CatalogEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    added: Option<AddedToCart>,
}

/// Toast raised by a product card's "Add to Cart" button.
#[derive(Debug, Serialize)]
struct AddedToCart {
    title: &'static str,
    message: String,
    cart_item_count: i64,
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let cards = if args.featured {
        seed::featured()
    } else {
        seed::catalog()
    };
    let added = args
        .add
        .as_deref()
        .map(|id| add_from_card(&cards, id))
        .transpose()?;

    if args.featured {
        return show_featured(&cards, added, ctx);
    }

    let state = build_state(&args)?;
    let page = state.view(&cards, ctx.config.listing.page_size);
    let facets = args
        .facets
        .then(|| state.facets(&cards, seed::CATEGORIES, seed::BRANDS));

    if ctx.output.is_json() {
        ctx.output.json(&BrowseReport {
            summary: page.summary(),
            sort: state.sort_order(),
            page,
            facets,
            added,
        });
        return Ok(());
    }

    ctx.output.header(&format!("Home / {}", page.breadcrumb));
    ctx.output.kv("Sort by", state.sort_order().display_name());

    if let Some(facets) = &facets {
        for facet in facets {
            ctx.output.info(&facet.name);
            for value in &facet.values {
                let mark = if value.selected { "[x]" } else { "[ ]" };
                ctx.output
                    .list_item(&format!("{} {} ({})", mark, value.value, value.count));
            }
        }
    }

    if page.is_empty() {
        ctx.output.info("No Products Found");
        ctx.output
            .info("Try adjusting your filters to find what you're looking for.");
    } else {
        ctx.output.info(&page.summary());
        print_cards(&page.items, ctx);
        if page.pagination.shows_pager() {
            ctx.output.info(&page.pagination.label());
        }
    }

    report_added(added.as_ref(), ctx);
    Ok(())
}

fn show_featured(cards: &[CatalogEntry], added: Option<AddedToCart>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&FeaturedReport {
            featured: cards,
            added,
        });
        return Ok(());
    }

    ctx.output.header("Featured Products");
    let refs: Vec<&CatalogEntry> = cards.iter().collect();
    print_cards(&refs, ctx);
    report_added(added.as_ref(), ctx);
    Ok(())
}

fn print_cards(cards: &[&CatalogEntry], ctx: &Context) {
    let title_col = title_width(ctx.output.term_width(), 48);
    for entry in cards {
        ctx.output.table_row(
            &[
                entry.id.as_str(),
                &entry.title,
                &entry.price.display_grouped(),
                &entry.stars().render(),
                &format!("({})", entry.review_count),
                &best_seller_badge(entry.is_best_seller),
            ],
            &[5, title_col, 10, 6, 6, 11],
        );
    }
}

fn report_added(added: Option<&AddedToCart>, ctx: &Context) {
    if let Some(added) = added {
        ctx.output.success(added.title);
        ctx.output.info(&added.message);
        ctx.output.kv("Cart items", &added.cart_item_count.to_string());
    }
}

/// Add one of the card with `id` to the seeded cart.
fn add_from_card(cards: &[CatalogEntry], id: &str) -> Result<AddedToCart> {
    let entry = catalog::find(cards, &ProductId::new(id))
        .context("Only products shown as cards can be added")?;

    let mut cart = Cart::with_entries(&seed::cart_lines())?;
    cart.add_item(entry, 1)?;
    tracing::info!(product = %entry.id, "added to cart from product card");

    Ok(AddedToCart {
        title: ADDED_TO_CART_TITLE,
        message: entry.added_to_cart_message(),
        cart_item_count: cart.item_count(),
    })
}

/// Replay the command-line filters onto a fresh listing state, in the order
/// a shopper would click them.
fn build_state(args: &BrowseArgs) -> Result<ListingState> {
    let mut state = match &args.search {
        Some(query) => ListingState::new().with_search(query.as_str()),
        None => ListingState::new(),
    };

    for category in &args.category {
        state.toggle_category(category);
    }
    for brand in &args.brand {
        state.toggle_brand(brand);
    }

    let order: SortOrder = args
        .sort
        .parse()
        .context("Expected one of: popularity, price-asc, price-desc")?;
    state.set_sort(order);
    state.set_page(args.page);

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BrowseArgs {
        BrowseArgs {
            category: Vec::new(),
            brand: Vec::new(),
            sort: "popularity".to_string(),
            page: 1,
            search: None,
            facets: false,
            featured: false,
            add: None,
        }
    }

    #[test]
    fn test_filters_then_page() {
        let mut a = args();
        a.category = vec!["Laptops".to_string()];
        a.sort = "price-desc".to_string();
        a.page = 2;
        let state = build_state(&a).unwrap();
        // The page flag is applied after the toggles, so it survives them.
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.sort_order(), SortOrder::PriceDesc);
        assert!(state.categories().contains("Laptops"));
    }

    #[test]
    fn test_repeated_category_unticks() {
        let mut a = args();
        a.category = vec!["Audio".to_string(), "Audio".to_string()];
        assert!(build_state(&a).unwrap().categories().is_empty());
    }

    #[test]
    fn test_bad_sort_is_an_error() {
        let mut a = args();
        a.sort = "rating".to_string();
        assert!(build_state(&a).is_err());
    }

    #[test]
    fn test_search_sets_breadcrumb() {
        let mut a = args();
        a.search = Some("Webcam".to_string());
        assert_eq!(build_state(&a).unwrap().breadcrumb(), "Webcam");
    }

    #[test]
    fn test_add_featured_card() {
        let added = add_from_card(&seed::featured(), "prod3").unwrap();
        assert_eq!(added.title, "Item Added to Cart");
        assert_eq!(
            added.message,
            "Noise-Cancelling Over-Ear Wireless Headphones has been successfully added to your cart."
        );
        // Two seeded lines plus the new card.
        assert_eq!(added.cart_item_count, 3);
    }

    #[test]
    fn test_add_listing_card_merges_with_cart_line() {
        let added = add_from_card(&seed::catalog(), "1").unwrap();
        assert!(added.message.starts_with("High-Performance Gaming Laptop"));
        assert_eq!(added.cart_item_count, 3);
    }

    #[test]
    fn test_add_unknown_card_is_an_error() {
        let err = add_from_card(&seed::featured(), "12").unwrap_err();
        assert!(format!("{:#}", err).contains("Product not found: 12"));
    }
}
