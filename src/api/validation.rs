use tracing::warn;

use crate::core::{ChartData, DataValue, Dataset};
use crate::error::{ChartError, ChartResult};

use super::{GaugeChartOptions, RadarChartOptions};

/// Category charts (line/area/bar/donut): numeric, finite, one value per label.
pub(super) fn validate_category_data(chart: &str, data: &ChartData) -> ChartResult<()> {
    for dataset in &data.datasets {
        let values = require_numbers(chart, dataset)?;
        if values.len() != data.labels.len() {
            warn!(
                chart,
                dataset = %dataset.label,
                labels = data.labels.len(),
                values = values.len(),
                "rejecting dataset with label/value length mismatch"
            );
            return Err(ChartError::LengthMismatch {
                dataset: dataset.label.clone(),
                labels: data.labels.len(),
                values: values.len(),
            });
        }
    }
    validate_dataset_styles(chart, data)
}

/// Donut charts only read the first dataset; the rest are ignored unchecked.
pub(super) fn validate_donut_data(data: &ChartData) -> ChartResult<()> {
    let first = ChartData {
        labels: data.labels.clone(),
        datasets: data.datasets.iter().take(1).cloned().collect(),
    };
    validate_category_data("donut", &first)?;
    if let Some(values) = first.datasets.first().and_then(Dataset::numbers) {
        if values.iter().any(|value| *value < 0.0) {
            return Err(ChartError::InvalidData(
                "donut slice values must be >= 0".to_owned(),
            ));
        }
    }
    Ok(())
}

/// Radar datasets hold one finite magnitude per indicator.
pub(super) fn validate_radar_data(data: &ChartData, options: &RadarChartOptions) -> ChartResult<()> {
    for dataset in &data.datasets {
        require_numbers("radar", dataset)?;
    }
    if let Some(max_value) = options.max_value {
        require_finite("radar max_value", max_value)?;
    }
    for indicator in options.indicators.iter().flatten() {
        if let Some(max) = indicator.max {
            require_finite("radar indicator max", max)?;
        }
    }
    validate_dataset_styles("radar", data)
}

/// Scatter entries: 2 or 3 finite coordinates after normalization.
pub(super) fn validate_scatter_data(data: &ChartData) -> ChartResult<()> {
    for dataset in &data.datasets {
        for (index, entry) in dataset.data.iter().enumerate() {
            let coords: Vec<f64> = match entry {
                DataValue::Number(value) => vec![*value],
                DataValue::Array(coords) => {
                    if !(2..=3).contains(&coords.len()) {
                        return Err(ChartError::InvalidData(format!(
                            "scatter dataset `{}` entry {index} must have 2 or 3 coordinates",
                            dataset.label
                        )));
                    }
                    coords.clone()
                }
                DataValue::Point { x, y, value } => {
                    let mut coords = vec![*x, *y];
                    coords.extend(*value);
                    coords
                }
            };
            if coords.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "scatter dataset `{}` entry {index} must be finite",
                    dataset.label
                )));
            }
            if coords.get(2).is_some_and(|weight| *weight < 0.0) {
                warn!(dataset = %dataset.label, index, "rejecting negative scatter weight");
                return Err(ChartError::InvalidData(format!(
                    "scatter dataset `{}` entry {index} weight must be >= 0",
                    dataset.label
                )));
            }
        }
    }
    validate_dataset_styles("scatter", data)
}

pub(super) fn validate_gauge_options(options: &GaugeChartOptions) -> ChartResult<()> {
    require_finite("gauge value", options.value)?;
    require_finite("gauge min", options.min)?;
    require_finite("gauge max", options.max)?;
    if options.min >= options.max {
        return Err(ChartError::InvalidData(format!(
            "gauge min ({}) must be < max ({})",
            options.min, options.max
        )));
    }
    let mut previous_to = options.min;
    for zone in options.zones.iter().flatten() {
        require_finite("gauge zone from", zone.from)?;
        require_finite("gauge zone to", zone.to)?;
        if zone.to < options.min || zone.to > options.max {
            return Err(ChartError::InvalidData(format!(
                "gauge zone end {} must lie within [{}, {}]",
                zone.to, options.min, options.max
            )));
        }
        if zone.to < previous_to {
            return Err(ChartError::InvalidData(format!(
                "gauge zones must be ordered by end value ({} after {previous_to})",
                zone.to
            )));
        }
        previous_to = zone.to;
    }
    Ok(())
}

fn require_numbers(chart: &str, dataset: &Dataset) -> ChartResult<Vec<f64>> {
    let Some(values) = dataset.numbers() else {
        warn!(chart, dataset = %dataset.label, "rejecting non-numeric dataset");
        return Err(ChartError::InvalidData(format!(
            "{chart} dataset `{}` must contain only numbers",
            dataset.label
        )));
    };
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{chart} dataset `{}` values must be finite",
            dataset.label
        )));
    }
    Ok(values)
}

fn require_finite(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{name} must be finite")));
    }
    Ok(())
}

fn validate_dataset_styles(chart: &str, data: &ChartData) -> ChartResult<()> {
    for dataset in &data.datasets {
        if dataset.border_width.is_some_and(|width| !width.is_finite() || width < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "{chart} dataset `{}` borderWidth must be finite and >= 0",
                dataset.label
            )));
        }
    }
    Ok(())
}
