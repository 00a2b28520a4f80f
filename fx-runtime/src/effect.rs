//! # Effect 模块
//!
//! 生命周期效果接口。
//!
//! 一个效果定义就是一对生命周期回调：元素进入存活文档时的
//! `on_attach`，元素被移除时的 `on_detach`（可选，默认无行为）。
//! 计时行为（延迟一步、重复间隔）由宿主 tick 驱动的 `update` 消耗。
//!
//! ## 调度契约
//!
//! - 单线程协作调度：所有回调都在宿主线程上执行，不得阻塞
//! - 同一绑定内 attach 先于 detach；detach 至多一次
//! - 回调不得向调度循环抛出错误或 panic；需要上报的失败
//!   记录到 [`EffectContext`] 携带的诊断通道

use crate::diagnostic::DiagnosticLog;
use crate::element::Element;

/// 效果回调执行环境
///
/// 目前只承载诊断通道。
pub struct EffectContext<'a> {
    /// 诊断通道
    pub diagnostics: &'a mut DiagnosticLog,
}

/// 生命周期效果接口
///
/// 每次 attach 通过注册表工厂产生独立实例；效果私有状态
/// （延迟步骤、间隔计时器、捕获的文本前缀）都存放在实例内，
/// 绑定移除时随实例一起丢弃。实例之间不共享任何状态。
pub trait Effect {
    /// 效果名（用于诊断与日志）
    fn name(&self) -> &'static str;

    /// 元素进入存活文档时调用
    fn on_attach(&mut self, element: &Element, ctx: &mut EffectContext<'_>);

    /// 元素被移除时调用
    ///
    /// 至多一次，且必定在 `on_attach` 之后。默认无行为。
    /// 需要同步停止的工作（如间隔计时器）必须在此处停止，
    /// 此后效果不得再修改元素。
    fn on_detach(&mut self, element: &Element, ctx: &mut EffectContext<'_>) {
        let _ = (element, ctx);
    }

    /// 每个宿主 tick 调用一次
    ///
    /// # 参数
    /// - `dt`: 距上个 tick 经过的时间（秒）
    ///
    /// 默认无行为。
    fn update(&mut self, element: &Element, dt: f32, ctx: &mut EffectContext<'_>) {
        let _ = (element, dt, ctx);
    }
}
