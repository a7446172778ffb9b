//! blogdemo - A small blog with articles, users and messages
//!
//! JSON endpoints for articles, users and messages, plus a rendered blog
//! front page, backed by SQLite or MySQL.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod theme;
