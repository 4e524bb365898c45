/// How the single product list component lays out its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

/// Presentation-only toggles that do not affect what data is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUiState {
    pub view_mode: ViewMode,
}

impl ProductUiState {
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}
