//! UI Components
//!
//! Leptos components for the shopping list widget.

mod clear_button;
mod item_filter;
mod item_form;
mod item_list;
mod theme_toggle;

pub use clear_button::ClearButton;
pub use item_filter::ItemFilter;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use theme_toggle::ThemeToggle;
