//! # Storage Module
//!
//! Serves the business data the domain services read from.
//!
//! The app keeps no data between runs: every dataset is hard-coded in
//! [`mock_data`]. Services only see the [`DataSource`] trait, so a real store can
//! replace the mock without touching the domain layer.

pub mod mock_data;
pub mod traits;

pub use mock_data::MockDataSource;
pub use traits::DataSource;
