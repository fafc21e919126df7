//! Domain layer for the Foodboard plugin.
//!
//! This module contains the core domain types and table logic for the plugin,
//! independent of Zellij-specific APIs or rendering concerns. The search
//! filter and paginator live here as pure functions so they can be exercised
//! without a terminal.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`food`]: Food record model, sample data, JSON loading
//! - [`paging`]: Search filtering and pagination core
//!
//! # Examples
//!
//! ```
//! use foodboard::domain::{filter_foods, paginate, sample_foods};
//!
//! let foods = sample_foods();
//! let filtered = filter_foods(&foods, "cake");
//! let view = paginate(filtered.len(), 1, 10);
//! assert_eq!(view.total_pages, 1);
//! ```

pub mod error;
pub mod food;
pub mod paging;

pub use error::{FoodboardError, Result};
pub use food::{load_foods, sample_foods, FoodRecord};
pub use paging::{exact_match, filter_foods, page_window, paginate, PageView};
