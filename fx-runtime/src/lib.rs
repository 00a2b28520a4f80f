//! # FX Runtime
//!
//! 生命周期效果注册表与运行时。
//!
//! ## 架构概述
//!
//! `fx-runtime` 把一组 UI 行为附件（淡入淡出、加载省略号、音频触发）
//! 收敛为一个统一抽象：**生命周期效果**。宿主层（Host）托管元素，
//! 在元素进入/离开文档时调用运行时：
//!
//! ```text
//! Host                               Runtime
//!   │                                   │
//!   │──── attach(name, element) ──────►│ 工厂实例化 + on_attach
//!   │◄─── BindingId ────────────────────│
//!   │                                   │
//!   │──── update(dt)（每 tick）───────►│ 消耗延迟步骤 / 间隔计时
//!   │                                   │
//!   │──── detach(binding) ────────────►│ on_detach + 丢弃私有状态
//! ```
//!
//! 单线程协作调度：所有回调都在宿主线程上执行，等待一律表达为
//! 由 `update(dt)` 消耗的已计划步骤，无锁、无后台线程
//! （音频输出线程由 rodio 后端持有，运行时从不等待它）。
//!
//! ## 核心类型
//!
//! - [`EffectRegistry`]：效果名到效果工厂的只读映射
//! - [`EffectRuntime`]：面向宿主的 attach/detach/update 调度接口
//! - [`Element`]：宿主托管元素句柄（文本 + 不透明度 + 过渡）
//! - [`Effect`]：生命周期效果接口
//! - [`DiagnosticLog`]：诊断通道（播放启动失败在这里上报）
//!
//! ## 使用示例
//!
//! ```ignore
//! use fx_runtime::{EffectRegistry, EffectRuntime, Element};
//!
//! let mut runtime = EffectRuntime::new(EffectRegistry::with_default_audio());
//! let element = Element::new("Loading");
//!
//! let binding = runtime.attach("LoadingEllipsis", &element)?;
//!
//! // 宿主主循环
//! loop {
//!     runtime.update(dt);
//!     // ... 渲染 element.text() / element.opacity() ...
//! }
//!
//! // 元素移除时
//! runtime.detach(binding);
//! ```
//!
//! ## 模块结构
//!
//! - [`element`]：元素句柄
//! - [`effect`]：效果接口与执行环境
//! - [`effects`]：三个内置效果定义
//! - [`registry`]：效果注册表与默认参数
//! - [`runtime`]：调度运行时
//! - [`timing`]：tick 驱动的计时原语
//! - [`diagnostic`]：诊断通道
//! - [`error`]：错误类型定义

pub mod diagnostic;
pub mod effect;
pub mod effects;
pub mod element;
pub mod error;
pub mod registry;
pub mod runtime;
pub mod timing;

// 重导出核心类型
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticLog};
pub use effect::{Effect, EffectContext};
pub use effects::{AudioBackend, FadeInOut, LoadingEllipsis, PlaySong, PlaybackError, RodioBackend};
pub use element::{Element, Transition};
pub use error::{EffectError, EffectResult};
pub use registry::{EffectRegistry, defaults};
pub use runtime::{BindingId, EffectRuntime};
pub use timing::{Interval, NextTick};
