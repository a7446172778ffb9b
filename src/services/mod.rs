//! Services layer
//!
//! Plain helpers (slugs, dates) and the thin services sitting between the
//! HTTP handlers and the repositories.

pub mod date_format;
pub mod message;
pub mod seed;
pub mod slug;

pub use date_format::{format_ordinal_date, ordinal};
pub use message::MessageService;
pub use seed::seed_demo_data;
pub use slug::to_slug;
