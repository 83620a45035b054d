//! Daily sales report: query aggregation, currency formatting, and
//! templated email dispatch for a once-a-day batch run.

pub mod config;
pub mod currency;
pub mod error;
pub mod mail;
pub mod report;
pub mod store;
