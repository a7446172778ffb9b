//! Data models
//!
//! Entities persisted by the repositories and serialized on the wire:
//! - `User`: a blog author, looked up by login
//! - `Article`: a post written by exactly one user
//! - `Message`: a free-standing text with an externally chosen id

mod article;
mod message;
mod user;

pub use article::Article;
pub use message::Message;
pub use user::User;
