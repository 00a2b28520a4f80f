//! # Config 模块
//!
//! 演示场景配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 场景文件 (scenario.json)
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// 演示场景配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 元素初始文本
    #[serde(default = "default_text")]
    pub text: String,

    /// 要附加的效果名列表
    #[serde(default = "default_effects")]
    pub effects: Vec<String>,

    /// 运行时长（秒）
    #[serde(default = "default_duration")]
    pub duration: f32,

    /// tick 间隔（秒）
    #[serde(default = "default_tick")]
    pub tick: f32,

    /// 资源根目录（音频资源从这里解析）
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
}

fn default_text() -> String {
    "Loading".to_string()
}

fn default_effects() -> Vec<String> {
    vec!["FadeInOut".to_string(), "LoadingEllipsis".to_string()]
}

fn default_duration() -> f32 {
    2.0
}

fn default_tick() -> f32 {
    1.0 / 30.0
}

fn default_assets_root() -> String {
    "assets".to_string()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            text: default_text(),
            effects: default_effects(),
            duration: default_duration(),
            tick: default_tick(),
            assets_root: default_assets_root(),
        }
    }
}

impl ScenarioConfig {
    /// 从 JSON 文件加载场景
    ///
    /// 缺省字段使用默认值填充。
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
