use crate::domain::product::model::Product;
use crate::domain::product::query::{DEFAULT_LIMIT, ListQuery};
use crate::domain::product::statistics::{total_value, unique_categories};

/// Everything the product list screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    /// Current page, in server order.
    pub products: Vec<Product>,
    pub total: u64,
    pub current_page: u32,
    pub page_size: u32,
    /// What the user typed, updated on every keystroke.
    pub search_term: String,
    /// The term fetches actually use, updated once typing settles.
    pub debounced_search_term: String,
    pub loading: bool,
    pub modal_visible: bool,
    /// `None` means the modal is in create mode.
    pub editing_product: Option<Product>,
    pub categories: Vec<String>,
    pub total_value: f64,
    pub submitting: bool,
    pub deleting: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            total: 0,
            current_page: 1,
            page_size: DEFAULT_LIMIT,
            search_term: String::new(),
            debounced_search_term: String::new(),
            loading: false,
            modal_visible: false,
            editing_product: None,
            categories: Vec::new(),
            total_value: 0.0,
            submitting: false,
            deleting: false,
        }
    }
}

impl ProductListState {
    pub fn list_query(&self) -> ListQuery {
        ListQuery::for_page(
            self.current_page,
            self.page_size,
            &self.debounced_search_term,
        )
    }

    pub fn is_editing(&self) -> bool {
        self.editing_product.is_some()
    }

    /// Replaces the page and recomputes the derived figures from it.
    pub(crate) fn apply_page(&mut self, products: Vec<Product>, total: u64) {
        self.categories = unique_categories(&products);
        self.total_value = total_value(&products);
        self.products = products;
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, category: &str) -> Product {
        Product {
            product_id: id.to_string(),
            product_title: format!("Product {id}"),
            product_price: Some(price),
            product_description: None,
            product_image: None,
            product_category: Some(category.to_string()),
            created_timestamp: None,
            updated_timestamp: None,
        }
    }

    #[test]
    fn should_start_on_first_page_with_default_size() {
        let state = ProductListState::default();

        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.list_query(), ListQuery::default());
    }

    #[test]
    fn should_build_query_from_page_and_debounced_term() {
        let state = ProductListState {
            current_page: 4,
            page_size: 20,
            search_term: "lam".to_string(),
            debounced_search_term: "lamp".to_string(),
            ..ProductListState::default()
        };

        let query = state.list_query();

        assert_eq!(query.offset, 60);
        assert_eq!(query.limit, 20);
        assert_eq!(query.search, "lamp");
    }

    #[test]
    fn should_recompute_statistics_when_page_is_applied() {
        let mut state = ProductListState::default();

        state.apply_page(
            vec![
                product("1", 10.0, "Office"),
                product("2", 5.5, "Garden"),
                product("3", 1.0, "Office"),
            ],
            42,
        );

        assert_eq!(state.total, 42);
        assert_eq!(state.categories, vec!["Office", "Garden"]);
        assert_eq!(state.total_value, 16.5);
    }
}
