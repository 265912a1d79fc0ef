pub mod header;
pub mod loading_indicator;
pub mod mode_selector;
pub mod results_panel;
pub mod staging_form;
pub mod tree_view;
