//! Home Energy Estimator
//!
//! A pure energy-breakdown engine for residential properties plus a thin
//! HTTP wrapper around it. The engine maps a BHK size category and an
//! appliance selection to labeled kW contributions, a total, and cost
//! projections at a configurable tariff; it is stateless and recomputed
//! fresh on every call.

pub mod api;
pub mod config;
pub mod domain;
pub mod estimator;
pub mod telemetry;

pub use domain::{
    Appliance, ApplianceSelection, BhkCategory, BreakdownEntry, CostEstimate, EnergyBreakdown,
    EstimateHorizon, EstimatorError,
};
pub use estimator::{breakdown_for, compute_breakdown, compute_total, saving_tips, Tariff};
