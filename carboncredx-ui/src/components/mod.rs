//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod assistant;
pub mod file_picker;
pub mod loading;
pub mod nav;
pub mod price_chart;
pub mod stat_card;
pub mod toast;

pub use assistant::AssistantWidget;
pub use file_picker::FilePicker;
pub use loading::{InlineLoading, TypingIndicator};
pub use nav::Nav;
pub use price_chart::PriceChart;
pub use stat_card::StatGrid;
pub use toast::Toast;
