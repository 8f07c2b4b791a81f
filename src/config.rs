//! Capability construction configuration / 能力构造配置
//!
//! Every resolved implementation is built from the same four pieces the host
//! hands to an analysis factory: index-level settings, the node environment,
//! the configured instance name, and the instance settings. Instance settings
//! stay as raw JSON so each implementation can pick out what it understands.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Index-level settings / 索引级配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Index name / 索引名称
    pub index_name: String,
    /// Raw index settings / 原始索引配置
    #[serde(default)]
    pub settings: serde_json::Value,
}

/// Node environment paths / 节点环境路径
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    /// Configuration directory (user dictionaries etc.) / 配置目录
    pub config_dir: PathBuf,
    /// Data directory / 数据目录
    pub data_dir: PathBuf,
}

/// Everything needed to instantiate a resolved implementation. / 构造上下文
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub index: IndexSettings,
    pub env: Environment,
    /// Instance name as written in the analyzer configuration / 实例名称
    pub name: String,
    /// Instance settings, opaque to the bridge / 实例配置
    pub settings: serde_json::Value,
}

impl AnalysisContext {
    pub fn new(index: IndexSettings, env: Environment, name: &str, settings: serde_json::Value) -> Self {
        Self {
            index,
            env,
            name: name.to_string(),
            settings,
        }
    }
}
