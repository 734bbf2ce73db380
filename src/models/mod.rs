// Records, request payloads and response shapes

pub mod exercise;
pub mod user;
pub mod validation;

pub use exercise::*;
pub use user::*;
