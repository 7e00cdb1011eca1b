pub mod astronomy;
pub mod cache;
pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod sun_phase;
