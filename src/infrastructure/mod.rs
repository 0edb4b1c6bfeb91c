//! Infrastructure layer - In-memory storage and services

pub mod logging;
pub mod order;
pub mod user;
