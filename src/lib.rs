//! Exercise tracker: a small REST service recording users and the exercises
//! they log, with date-bounded retrieval of each user's exercise log.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
