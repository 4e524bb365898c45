use super::model::Product;

/// Figures shown above the product list.
///
/// These are computed from whatever slice is passed in. The coordinator passes
/// the current page only, so with `total > page_size` they understate the
/// whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStatistics {
    pub categories: Vec<String>,
    pub total_value: f64,
    pub average_price: f64,
}

pub fn calculate_product_statistics(products: &[Product]) -> ProductStatistics {
    let categories = unique_categories(products);
    let total_value = total_value(products);
    let average_price = if products.is_empty() {
        0.0
    } else {
        (total_value / products.len() as f64).round()
    };

    ProductStatistics {
        categories,
        total_value,
        average_price,
    }
}

/// Non-empty categories in first-seen order, exact-match deduplicated.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in products
        .iter()
        .filter_map(|p| p.product_category.as_deref())
        .filter(|c| !c.is_empty())
    {
        if !categories.iter().any(|seen| seen == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

pub fn total_value(products: &[Product]) -> f64 {
    products.iter().map(Product::price_or_zero).sum()
}

/// `$` followed by the en-US grouped amount, e.g. `$1,234.5`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => format!("${}", group_thousands(value)),
        _ => "$0".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() > max_length {
        let head: String = text.chars().take(max_length).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
