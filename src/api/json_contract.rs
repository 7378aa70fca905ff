use serde::{Deserialize, Serialize};

use crate::core::{DegenerateReason, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::BalanceChart;

pub const SELECTION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Host-readable chart state, e.g. for syncing a detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub viewport: Viewport,
    pub sample_count: usize,
    pub selected_index: Option<usize>,
    pub selected_value: Option<f64>,
    pub selected_label: Option<String>,
    /// Plot-local scrubber x.
    pub scrubber_x: Option<f64>,
    pub degenerate: Option<DegenerateReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectionSnapshot,
}

impl SelectionSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SelectionSnapshotJsonContractV1 {
            schema_version: SELECTION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize selection contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SelectionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SelectionSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse selection json payload: {e}"))
            })?;
        if payload.schema_version != SELECTION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported selection schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> BalanceChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        let selected_index = self.selected_index();
        SelectionSnapshot {
            viewport: self.viewport,
            sample_count: self.samples.len(),
            selected_index,
            selected_value: self.selected_value(),
            selected_label: selected_index
                .and_then(|index| self.axis_labels.get(index))
                .map(str::to_owned),
            scrubber_x: self.scrubber_x(),
            degenerate: self.degenerate_reason(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
