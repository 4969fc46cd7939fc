// Domain layer - Pure models and logic
pub mod drawing;
pub mod error;
pub mod tracker;
