// Application layer - Use cases and repository traits
pub mod drawing_repository;
pub mod drawing_service;
pub mod map_repository;
pub mod map_service;
pub mod tracker_service;
pub mod tracking_repository;
