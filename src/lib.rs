//! chart-compose-rs: pure chart option-tree composition.
//!
//! Converts an abstract [`core::ChartData`] model plus styling options into the
//! declarative option tree consumed by an external charting backend, for line,
//! area, bar, donut/pie, radar, scatter and gauge charts. Composition is a pure
//! function of its inputs; hosts re-invoke it on every change.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartHost, ChartOptions, ChartSpec, ComposedChart, compose};
pub use error::{ChartError, ChartResult};
