use serde::{Deserialize, Serialize};

use crate::core::{RenderState, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartSettings, ChartView};

pub const CHART_SETTINGS_JSON_SCHEMA_V1: u32 = 1;
pub const RENDER_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettingsJsonContractV1 {
    pub schema_version: u32,
    pub settings: ChartSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStateJsonContractV1 {
    pub schema_version: u32,
    pub state: RenderState,
}

impl ChartSettings {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSettingsJsonContractV1 {
            schema_version: CHART_SETTINGS_JSON_SCHEMA_V1,
            settings: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize settings contract v1: {e}"))
        })
    }

    /// Accepts either a bare settings object or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartSettingsJsonContractV1>(input) {
            if payload.schema_version != CHART_SETTINGS_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported settings schema version: {}",
                    payload.schema_version
                )));
            }
            payload.settings.validate()?;
            return Ok(payload.settings);
        }
        let settings: ChartSettings = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse settings json payload: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }
}

impl RenderState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderStateJsonContractV1 {
            schema_version: RENDER_STATE_JSON_SCHEMA_V1,
            state: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render state contract v1: {e}"))
        })
    }
}

impl<R: Renderer> ChartView<R> {
    pub fn render_state_json_contract_v1_pretty(&self, viewport: Viewport) -> ChartResult<String> {
        self.layout(viewport)?.to_json_contract_v1_pretty()
    }
}
