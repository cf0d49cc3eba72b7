pub mod attendance;
pub mod repository;
pub mod service;
