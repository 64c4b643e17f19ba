//! 鸭子配置
//!
//! 用 JSON 描述一只鸭子，策略按名称在内置目录中解析：
//!
//! ```json
//! { "kind": "mallard", "fly": "rocket_powered", "quack": "squeak" }
//! ```

use crate::behavior::{Slot, Strategy, strategy_by_name};
use crate::duck::{Duck, DuckBuilder, DuckKind};
use crate::{DuckError, DuckResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct DuckConfig {
    pub kind: DuckKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quack: Option<String>,
}

impl DuckConfig {
    pub fn new(kind: DuckKind) -> Self {
        Self {
            kind,
            fly: None,
            quack: None,
        }
    }

    pub fn with_fly(mut self, name: impl Into<String>) -> Self {
        self.fly = Some(name.into());
        self
    }

    pub fn with_quack(mut self, name: impl Into<String>) -> Self {
        self.quack = Some(name.into());
        self
    }

    pub fn from_json_str(json: &str) -> DuckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DuckResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading duck config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> DuckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 解析策略名称并构建鸭子，未指定的槽位使用种类默认策略
    pub fn build(&self) -> DuckResult<Duck> {
        let mut builder = DuckBuilder::new(self.kind);
        for (slot, name) in [(Slot::Fly, &self.fly), (Slot::Quack, &self.quack)] {
            if let Some(name) = name {
                builder = builder.with_strategy(resolve(slot, name)?);
            }
        }
        Ok(builder.build())
    }
}

fn resolve(slot: Slot, name: &str) -> DuckResult<Strategy> {
    let strategy = strategy_by_name(name).ok_or_else(|| {
        DuckError::InvalidConfiguration(format!("unknown {} strategy '{}'", slot, name))
    })?;
    if strategy.slot() != slot {
        return Err(DuckError::CapabilityMismatch {
            slot,
            offered: name.to_string(),
        });
    }
    Ok(strategy)
}
