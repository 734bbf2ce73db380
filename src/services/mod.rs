// Request orchestration over the store

pub mod exercise_service;
pub mod user_service;

pub use exercise_service::ExerciseService;
pub use user_service::UserService;
