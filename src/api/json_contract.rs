use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartData, ChartOptions};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope handed to an external line-chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfigJsonContractV1 {
    #[must_use]
    pub fn new(data: ChartData, options: ChartOptions) -> Self {
        Self {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            data,
            options,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl ChartData {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart data: {e}")))
    }
}

impl ChartOptions {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }
}
