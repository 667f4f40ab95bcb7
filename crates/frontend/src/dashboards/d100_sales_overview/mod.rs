pub mod api;
pub mod category_tree;
pub mod chart_data;
pub mod filter_state;
pub mod orchestrator;
pub mod pivot;
pub mod query_slot;
pub mod ui;
