use serde::{Deserialize, Serialize};

/// Category-based chart input: ordered labels plus ordered datasets.
///
/// Label order maps 1:1 onto axis ticks and onto each dataset's positional
/// values. Dataset order drives series order, legend order and the default
/// color-cycle index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Dataset labels in series order.
    #[must_use]
    pub fn series_names(&self) -> Vec<String> {
        self.datasets.iter().map(|ds| ds.label.clone()).collect()
    }
}

/// One named series of values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<DataValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: label.into(),
            data: values.into_iter().map(DataValue::Number).collect(),
            ..Self::default()
        }
    }

    /// Dataset holding scatter entries of mixed shape.
    #[must_use]
    pub fn from_values(label: impl Into<String>, data: Vec<DataValue>) -> Self {
        Self {
            label: label.into(),
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: ColorSpec) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    /// Numeric view of `data`; `None` when any entry is not a bare number.
    #[must_use]
    pub fn numbers(&self) -> Option<Vec<f64>> {
        self.data.iter().map(DataValue::as_number).collect()
    }
}

/// One dataset entry.
///
/// Category and radar charts use bare numbers. Scatter charts accept `[x, y]`
/// arrays (optionally `[x, y, v]`), `{x, y, value?}` records, or bare numbers
/// that are placed at their positional index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Array(Vec<f64>),
    Point {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
    },
}

impl DataValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Array(_) | Self::Point { .. } => None,
        }
    }

    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point { x, y, value: None }
    }

    #[must_use]
    pub fn weighted_point(x: f64, y: f64, value: f64) -> Self {
        Self::Point {
            x,
            y,
            value: Some(value),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<[f64; 2]> for DataValue {
    fn from(pair: [f64; 2]) -> Self {
        Self::Array(pair.to_vec())
    }
}

/// A single color or an ordered list of colors (per-slice for donut charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    List(Vec<String>),
}

impl ColorSpec {
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color.as_str()),
            Self::List(colors) => colors.first().map(String::as_str),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color.as_str()),
            Self::List(colors) => colors.get(index).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartData, DataValue, Dataset};

    #[test]
    fn data_values_deserialize_from_every_supported_shape() {
        let values: Vec<DataValue> =
            serde_json::from_str(r#"[4, [3, 7], {"x": 3, "y": 7, "value": 9}, {"x": 1, "y": 2}]"#)
                .expect("parse values");
        assert_eq!(values[0], DataValue::Number(4.0));
        assert_eq!(values[1], DataValue::Array(vec![3.0, 7.0]));
        assert_eq!(values[2], DataValue::weighted_point(3.0, 7.0, 9.0));
        assert_eq!(values[3], DataValue::point(1.0, 2.0));
    }

    #[test]
    fn numbers_rejects_mixed_datasets() {
        let mixed = Dataset::from_values("mixed", vec![1.0.into(), [1.0, 2.0].into()]);
        assert!(mixed.numbers().is_none());
        assert_eq!(Dataset::new("n", [1.0, 2.0]).numbers(), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn chart_data_reads_camel_case_fields() {
        let data: ChartData = serde_json::from_str(
            r##"{"labels": ["a"], "datasets": [{"label": "s", "data": [1], "borderColor": "#fff"}]}"##,
        )
        .expect("parse chart data");
        assert_eq!(data.datasets[0].border_color.as_deref(), Some("#fff"));
        assert_eq!(data.series_names(), vec!["s".to_owned()]);
    }
}
