pub mod api;
pub mod config;
pub mod demand;
pub mod domain;
pub mod error;
pub mod finance;
pub mod repo;
pub mod state;
pub mod storage;
pub mod telemetry;
