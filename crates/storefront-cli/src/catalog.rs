//! Read-side command handlers: render the store's collections and views.

use storefront_core::Product;
use storefront_store::{CatalogStore, Collection, CollectionStatus};

use crate::routes::Route;

/// How `products` narrows the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProductFilter {
    All,
    Group(String),
    Category(i64),
    Popular,
}

pub(crate) fn print_status(store: &CatalogStore) {
    println!("{:<12}{:<10}{:<8}LOADED AT", "COLLECTION", "STATUS", "COUNT");
    print_status_row("groups", store.groups());
    print_status_row("categories", store.categories());
    print_status_row("products", store.products());
    print_status_row("promotions", store.promotions());
}

fn print_status_row<T>(name: &str, collection: &Collection<T>) {
    let status = match collection.status() {
        CollectionStatus::Idle => "idle".to_string(),
        CollectionStatus::Loading => "loading".to_string(),
        CollectionStatus::Loaded => "loaded".to_string(),
        CollectionStatus::Errored(failure) => format!("error ({})", failure.kind),
    };
    let loaded_at = collection.loaded_at().map_or_else(
        || "\u{2014}".to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    println!("{name:<12}{status:<10}{:<8}{loaded_at}", collection.len());
    if let Some(failure) = collection.last_error() {
        println!("  {}", failure.message);
    }
}

pub(crate) fn print_groups(store: &CatalogStore) {
    if store.groups().is_empty() {
        println!("no groups found");
        return;
    }
    println!("{:<6}NAME", "ID");
    for group in store.groups().items() {
        println!("{:<6}{}", fmt_id(group.id), group.name);
    }
}

pub(crate) fn print_categories(store: &CatalogStore, group: Option<&str>) {
    let categories: Vec<_> = match group {
        Some(name) => store.categories_by_group_name(name),
        None => store.categories().items().iter().collect(),
    };
    if categories.is_empty() {
        println!(
            "no categories found{}",
            group.map(|g| format!(" in group \"{g}\"")).unwrap_or_default()
        );
        return;
    }
    println!("{:<6}{:<24}{:<10}{:<7}COLOR", "ID", "NAME", "PRODUCTS", "GROUP");
    for c in categories {
        println!(
            "{:<6}{:<24}{:<10}{:<7}{}",
            fmt_id(c.id),
            c.name,
            c.product_count,
            c.group_id,
            c.color
        );
    }
}

pub(crate) fn print_promotions(store: &CatalogStore) {
    if store.promotions().is_empty() {
        println!("no promotions");
        return;
    }
    for p in store.promotions().items() {
        println!("[{}] {} ({})", fmt_id(p.id), p.title, p.button_text);
    }
}

pub(crate) fn print_menu(store: &CatalogStore) {
    println!("{}", store.category_names().join(" | "));
}

pub(crate) fn print_products(store: &CatalogStore, filter: &ProductFilter) {
    let products = match filter {
        ProductFilter::All => store.products().items().iter().collect(),
        ProductFilter::Group(name) => store.products_by_group_name(name),
        ProductFilter::Category(id) => store.products_by_category_id(*id),
        ProductFilter::Popular => store.popular_products(),
    };
    print_product_table(&products);
}

/// Renders the page a storefront path resolves to.
pub(crate) fn print_route(store: &CatalogStore, path: &str) {
    let route = Route::resolve(path);
    tracing::debug!(path, route = route.name(), "resolved route");

    match route {
        Route::Home => {
            println!("== Promotions ==");
            print_promotions(store);
            println!();
            println!("== Categories ==");
            print_menu(store);
            println!();
            println!("== Popular products ==");
            print_product_table(&store.popular_products());
        }
        Route::Category { category_id } => {
            let title = store
                .category_by_id(category_id)
                .map_or_else(|| format!("category {category_id}"), |c| c.name.clone());
            println!("== {title} ==");
            print_product_table(&store.products_by_category_id(category_id));
        }
        Route::Product { product_id } => match store.product_by_id(product_id) {
            Some(product) => print_product_detail(product),
            None => println!("product {product_id} not found"),
        },
    }
}

pub(crate) fn print_product_table(products: &[&Product]) {
    if products.is_empty() {
        println!("no products found");
        return;
    }
    println!(
        "{:<6}{:<36}{:>10}{:>7}{:>7}  STOCK",
        "ID", "NAME", "PRICE", "OFF", "SOLD"
    );
    for p in products {
        println!(
            "{:<6}{:<36}{:>10.2}{:>6}%{:>7}  {}",
            fmt_id(p.id),
            truncate(&p.name, 34),
            p.price,
            p.promotion_as_percentage,
            p.count_sold,
            if p.in_stock { "in stock" } else { "sold out" }
        );
    }
}

pub(crate) fn print_product_detail(p: &Product) {
    println!("{} (#{})", p.name, fmt_id(p.id));
    if let Some(vendor) = &p.vendor {
        println!("By {vendor}");
    }
    println!("{}", p.detail);
    println!(
        "Price: {:.2} ({}% off, now {:.2})",
        p.price,
        p.promotion_as_percentage,
        p.discounted_price()
    );
    println!("Rating: {:.1}  Size: {}  Sold: {}", p.rating, p.size, p.count_sold);
    println!(
        "Stock: {}",
        if p.in_stock {
            format!("{} available", p.stock)
        } else {
            "sold out".to_string()
        }
    );
    println!("Category: {}  Group: {}", p.category_id, p.group_id);
    if !p.image.is_empty() {
        println!("Images: {}", p.image.join(", "));
    }
}

fn fmt_id(id: Option<i64>) -> String {
    id.map_or_else(|| "\u{2014}".to_string(), |id| id.to_string())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars - 3).collect::<String>())
    } else {
        s.to_string()
    }
}
