use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::TypedValue;
use crate::error::ValidationError;

/// Optional per-axis presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AxisSetting {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<AxisSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<AxisSetting>,
}

/// One legend entry: paired categorical and numeric values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    horizontal: Vec<TypedValue>,
    vertical: Vec<TypedValue>,
}

impl Series {
    #[must_use]
    pub fn new(
        title: Option<String>,
        horizontal: Vec<TypedValue>,
        vertical: Vec<TypedValue>,
    ) -> Self {
        Self {
            title,
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn horizontal(&self) -> &[TypedValue] {
        &self.horizontal
    }

    #[must_use]
    pub fn vertical(&self) -> &[TypedValue] {
        &self.vertical
    }

    /// Numeric vertical values in category order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.vertical.iter().filter_map(TypedValue::as_number)
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values().map(OrderedFloat).max().map(OrderedFloat::into_inner)
    }
}

/// Validated chart payload.
///
/// Only obtainable through the validation gate, so every instance satisfies
/// the shape invariants: at least one series, equal horizontal and vertical
/// lengths across all series, and numeric vertical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(rename = "axesSettings", skip_serializing_if = "Option::is_none")]
    axes_settings: Option<AxesSettings>,
    #[serde(rename = "data")]
    series: Vec<Series>,
}

#[derive(Debug, Deserialize)]
struct RawChartData {
    #[serde(rename = "axesSettings", default)]
    axes_settings: Option<AxesSettings>,
    data: Vec<RawSeries>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    #[serde(default)]
    title: Option<String>,
    horizontal: Vec<Value>,
    vertical: Vec<Value>,
}

impl ChartData {
    /// Decodes and validates a JSON payload. See [`validate_chart_json`].
    pub fn from_json_slice(json: &[u8]) -> Result<Self, ValidationError> {
        validate_chart_json(json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        validate_chart_json(json.as_bytes())
    }

    /// Validates already-decoded series.
    pub fn from_series(
        axes_settings: Option<AxesSettings>,
        series: Vec<Series>,
    ) -> Result<Self, ValidationError> {
        check_shape(&series)?;
        Ok(Self {
            axes_settings,
            series,
        })
    }

    #[must_use]
    pub fn axes_settings(&self) -> Option<&AxesSettings> {
        self.axes_settings.as_ref()
    }

    #[must_use]
    pub fn horizontal_title(&self) -> Option<&str> {
        self.axes_settings
            .as_ref()
            .and_then(|axes| axes.horizontal.as_ref())
            .and_then(|axis| axis.title.as_deref())
    }

    #[must_use]
    pub fn vertical_title(&self) -> Option<&str> {
        self.axes_settings
            .as_ref()
            .and_then(|axes| axes.vertical.as_ref())
            .and_then(|axis| axis.title.as_deref())
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Category labels are taken from the first series.
    #[must_use]
    pub fn category_labels(&self) -> &[TypedValue] {
        self.series
            .first()
            .map_or(&[][..], |series| series.horizontal())
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.category_labels().len()
    }

    /// Largest vertical value across every series, `None` when all series are
    /// empty.
    #[must_use]
    pub fn max_vertical_value(&self) -> Option<f64> {
        self.series
            .iter()
            .filter_map(Series::max_value)
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }
}

/// Single validation gate shared by every chart kind.
///
/// Fails on the first violated rule; nothing is returned on failure.
pub fn validate_chart_json(json: &[u8]) -> Result<ChartData, ValidationError> {
    let raw: RawChartData = serde_json::from_slice(json).map_err(|err| {
        warn!(error = %err, "rejecting chart json");
        ValidationError::MalformedJson(err.to_string())
    })?;

    let mut series = Vec::with_capacity(raw.data.len());
    for raw_series in raw.data {
        series.push(Series {
            title: raw_series.title,
            horizontal: decode_values(&raw_series.horizontal)?,
            vertical: decode_values(&raw_series.vertical)?,
        });
    }

    let data = ChartData::from_series(raw.axes_settings, series)?;
    debug!(
        series = data.series_count(),
        categories = data.category_count(),
        "chart data validated"
    );
    Ok(data)
}

fn decode_values(nodes: &[Value]) -> Result<Vec<TypedValue>, ValidationError> {
    nodes.iter().map(TypedValue::from_json).collect()
}

fn check_shape(series: &[Series]) -> Result<(), ValidationError> {
    let Some(first) = series.first() else {
        warn!("rejecting chart data without series");
        return Err(ValidationError::NoData);
    };

    let expected = first.horizontal.len();
    for (index, entry) in series.iter().enumerate() {
        if entry.horizontal.len() != expected || entry.vertical.len() != expected {
            warn!(
                series = index,
                horizontal = entry.horizontal.len(),
                vertical = entry.vertical.len(),
                expected,
                "rejecting chart data with mismatched lengths"
            );
            return Err(ValidationError::LengthMismatch {
                series: index,
                horizontal: entry.horizontal.len(),
                vertical: entry.vertical.len(),
                expected,
            });
        }
    }

    for (series_index, entry) in series.iter().enumerate() {
        if let Some((index, value)) = entry
            .vertical
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_number())
        {
            warn!(
                series = series_index,
                index, "rejecting chart data with non-numeric vertical value"
            );
            return Err(ValidationError::NonNumericVertical {
                series: series_index,
                index,
                value: value.canonical_string(),
            });
        }
    }

    Ok(())
}
