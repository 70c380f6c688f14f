pub mod tracker_service;

pub use tracker_service::helpers::{ChartPoint, InitialChart, QueryOutput};
pub use tracker_service::CpiTracker;
