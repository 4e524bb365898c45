use business::application::product_list::state::ProductListState;
use business::application::product_list::ui::{ProductUiState, ViewMode};
use business::domain::product::model::Product;
use business::domain::product::statistics::{
    calculate_product_statistics, format_price, truncate_text,
};

const TITLE_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 40;

pub fn render(state: &ProductListState, ui: &ProductUiState) -> String {
    let mut out = String::new();

    if state.products.is_empty() {
        out.push_str("No products found\n");
    } else {
        match ui.view_mode {
            ViewMode::Table => render_table(&state.products, &mut out),
            ViewMode::Grid => render_grid(&state.products, &mut out),
        }
    }

    out.push_str(&summary(state));
    out
}

/// Single product view: every field, with the same fallbacks as the list.
pub fn render_detail(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", product.product_title));
    out.push_str(&format!("  Id:          {}\n", product.product_id.trim()));
    out.push_str(&format!("  Price:       {}\n", format_price(product.product_price)));
    out.push_str(&format!("  Category:    {}\n", product.category_label()));
    out.push_str(&format!("  Description: {}\n", product.description_or_default()));
    if let Some(image) = product.product_image.as_deref().filter(|i| !i.is_empty()) {
        out.push_str(&format!("  Image:       {}\n", image));
    }
    if let Some(created) = product.created_timestamp.as_deref() {
        out.push_str(&format!("  Created:     {}\n", created));
    }
    if let Some(updated) = product.updated_timestamp.as_deref() {
        out.push_str(&format!("  Updated:     {}\n", updated));
    }
    out
}

fn render_table(products: &[Product], out: &mut String) {
    out.push_str(&format!(
        "{:<30}  {:>12}  {:<16}  {}\n",
        "Title", "Price", "Category", "Description"
    ));
    for product in products {
        out.push_str(&format!(
            "{:<30}  {:>12}  {:<16}  {}\n",
            truncate_text(&product.product_title, TITLE_WIDTH),
            format_price(product.product_price),
            product.category_label(),
            truncate_text(product.description_or_default(), DESCRIPTION_WIDTH),
        ));
    }
}

fn render_grid(products: &[Product], out: &mut String) {
    for product in products {
        out.push_str(&format!(
            "[{}] {}\n    {}\n    {}\n\n",
            product.category_label(),
            product.product_title,
            format_price(product.product_price),
            truncate_text(product.description_or_default(), DESCRIPTION_WIDTH),
        ));
    }
}

fn summary(state: &ProductListState) -> String {
    let statistics = calculate_product_statistics(&state.products);
    format!(
        "Page {} | {} of {} products | {} categories | total value {} | average {}\n",
        state.current_page,
        state.products.len(),
        state.total,
        statistics.categories.len(),
        format_price(Some(state.total_value)),
        format_price(Some(statistics.average_price)),
    )
}
