//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod contact_messages;
pub mod food_items;
pub mod health;
pub mod orders;
pub mod reservations;
