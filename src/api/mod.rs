// API routes and handlers

pub mod extract;
pub mod health;
pub mod routes;
pub mod users;
