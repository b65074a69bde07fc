//! Terminal presentation of dashboards and the upload flow

pub mod currency;
pub mod dashboard;
pub mod setup;
pub mod ui;
pub mod upload;
