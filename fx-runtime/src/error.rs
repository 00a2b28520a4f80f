//! # Error 模块
//!
//! 定义 fx-runtime 面向宿主 API 的错误类型。
//!
//! 注意：效果级的播放启动失败
//! （[`PlaybackError`](crate::effects::PlaybackError)）在产生点
//! 被包含并记入诊断通道，不会出现在这里。

use thiserror::Error;

/// 效果运行时错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// 未注册的效果名
    #[error("未注册的效果名 '{name}'")]
    UnknownEffect { name: String },
}

/// Result 类型别名
pub type EffectResult<T> = Result<T, EffectError>;
