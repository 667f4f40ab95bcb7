use leptos::prelude::*;

/// Какие боковые панели открыты.
///
/// Только состояние отображения: хранится отдельно от фильтров дашборда,
/// показ или скрытие панели не перезапрашивает данные.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub navigation_open: RwSignal<bool>,
    pub categories_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            navigation_open: RwSignal::new(true),
            categories_open: RwSignal::new(true),
        }
    }

    pub fn toggle_navigation(&self) {
        self.navigation_open.update(|val| *val = !*val);
    }

    pub fn toggle_categories(&self) {
        self.categories_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
