pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod paths;
pub mod scoring;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
