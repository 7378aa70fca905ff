use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered, immutable sample values. A sample's identity is its index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SampleSeries {
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "sample at index {index} must be finite"
            )));
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Index of the largest sample; ties resolve to the first occurrence.
    #[must_use]
    pub fn peak_index(&self) -> Option<usize> {
        let mut best: Option<(usize, OrderedFloat<f64>)> = None;
        for (index, value) in self.values.iter().copied().map(OrderedFloat).enumerate() {
            match best {
                Some((_, current)) if value <= current => {}
                _ => best = Some((index, value)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl TryFrom<Vec<f64>> for SampleSeries {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<SampleSeries> for Vec<f64> {
    fn from(series: SampleSeries) -> Self {
        series.values
    }
}

/// Gridline values for the vertical axis. The largest tick is the ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct YAxisTicks {
    ticks: Vec<f64>,
}

impl YAxisTicks {
    pub fn new(ticks: Vec<f64>) -> ChartResult<Self> {
        if ticks.is_empty() {
            return Err(ChartError::InvalidData(
                "y-axis ticks must not be empty".to_owned(),
            ));
        }
        if ticks.iter().any(|tick| !tick.is_finite()) {
            return Err(ChartError::InvalidData(
                "y-axis ticks must be finite".to_owned(),
            ));
        }
        if ticks.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ChartError::InvalidData(
                "y-axis ticks must be non-decreasing".to_owned(),
            ));
        }
        Ok(Self { ticks })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.ticks
    }

    /// Vertical scale ceiling (`maxY`).
    #[must_use]
    pub fn max(&self) -> f64 {
        self.ticks.last().copied().unwrap_or(0.0)
    }
}

impl TryFrom<Vec<f64>> for YAxisTicks {
    type Error = ChartError;

    fn try_from(ticks: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(ticks)
    }
}

impl From<YAxisTicks> for Vec<f64> {
    fn from(ticks: YAxisTicks) -> Self {
        ticks.ticks
    }
}

/// Sparse sample-index to label mapping for the x-axis label row.
///
/// Keys are zero-based sample indices; insertion order is the row order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisLabels {
    labels: IndexMap<usize, String>,
}

impl AxisLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds labels from 1-based positions, where position `p` labels sample `p - 1`.
    pub fn from_one_based<I, S>(entries: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let mut labels = Self::new();
        for (position, text) in entries {
            let index = position.checked_sub(1).ok_or_else(|| {
                ChartError::InvalidData("1-based label position must be >= 1".to_owned())
            })?;
            labels.insert(index, text)?;
        }
        Ok(labels)
    }

    /// Binds `text` to `index`. An index can carry at most one label.
    pub fn insert(&mut self, index: usize, text: impl Into<String>) -> ChartResult<()> {
        if self.labels.contains_key(&index) {
            return Err(ChartError::InvalidData(format!(
                "sample index {index} already has a label"
            )));
        }
        self.labels.insert(index, text.into());
        Ok(())
    }

    pub fn with_label(mut self, index: usize, text: impl Into<String>) -> ChartResult<Self> {
        self.insert(index, text)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(|(index, text)| (*index, text.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
