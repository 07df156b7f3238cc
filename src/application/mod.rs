/// Application layer - Use cases, DTOs and read models
///
/// This layer contains the application logic that coordinates the
/// snapshot domain with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
