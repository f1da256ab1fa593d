use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, EngineSnapshot};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

/// Payloads that carry their own `schema_version`.
trait Versioned: DeserializeOwned {
    type Inner: DeserializeOwned;
    const KIND: &'static str;
    const SCHEMA: u32;

    fn schema_version(&self) -> u32;
    fn into_inner(self) -> Self::Inner;
}

impl Versioned for EngineSnapshotJsonContractV1 {
    type Inner = EngineSnapshot;
    const KIND: &'static str = "snapshot";
    const SCHEMA: u32 = ENGINE_SNAPSHOT_JSON_SCHEMA_V1;

    fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn into_inner(self) -> EngineSnapshot {
        self.snapshot
    }
}

impl Versioned for ChartEngineConfigJsonContractV1 {
    type Inner = ChartEngineConfig;
    const KIND: &'static str = "chart config";
    const SCHEMA: u32 = CHART_CONFIG_JSON_SCHEMA_V1;

    fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn into_inner(self) -> ChartEngineConfig {
        self.config
    }
}

/// Bare payload first, then the versioned wrapper.
fn decode_compat<V: Versioned>(input: &str) -> ChartResult<V::Inner> {
    if let Ok(bare) = serde_json::from_str::<V::Inner>(input) {
        return Ok(bare);
    }
    let payload: V = serde_json::from_str(input).map_err(|e| {
        ChartError::InvalidArgument(format!("failed to parse {} json payload: {e}", V::KIND))
    })?;
    if payload.schema_version() != V::SCHEMA {
        return Err(ChartError::InvalidArgument(format!(
            "unsupported {} schema version: {}",
            V::KIND,
            payload.schema_version()
        )));
    }
    Ok(payload.into_inner())
}

fn encode_pretty<T: Serialize>(payload: &T, kind: &str) -> ChartResult<String> {
    serde_json::to_string_pretty(payload).map_err(|e| {
        ChartError::InvalidArgument(format!("failed to serialize {kind} contract v1: {e}"))
    })
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        encode_pretty(&payload, EngineSnapshotJsonContractV1::KIND)
    }

    /// Accepts either a bare snapshot or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        decode_compat::<EngineSnapshotJsonContractV1>(input)
    }
}

impl ChartEngineConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartEngineConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        encode_pretty(&payload, ChartEngineConfigJsonContractV1::KIND)
    }

    /// Accepts either a bare config or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        decode_compat::<ChartEngineConfigJsonContractV1>(input)
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
