pub mod footer;
pub mod loading_overlay;
pub mod navigation;
pub mod nutrient_bar;
pub mod step_indicator;
