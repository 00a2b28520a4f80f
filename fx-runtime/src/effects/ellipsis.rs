//! # LoadingEllipsis 效果
//!
//! 在元素文本后循环追加 "." / ".." / "..." 的加载动画。

use crate::effect::{Effect, EffectContext};
use crate::element::Element;
use crate::registry::defaults;
use crate::timing::Interval;

/// 加载省略号效果
///
/// ## 行为契约
///
/// - attach：捕获元素当前文本作为稳定前缀，计数器归零，
///   启动 [`defaults::ELLIPSIS_PERIOD`] 的重复间隔
/// - 每次间隔触发：写入 `前缀 + 帧[计数 % 3]`，然后计数加一
///   （帧序列见 [`defaults::ELLIPSIS_FRAMES`]）
/// - detach：在回调内同步停止间隔；此后不再修改元素
///
/// 效果可重启：每次 attach 都通过注册表工厂产生新实例，
/// 计数器与捕获的前缀互不干扰。
#[derive(Debug, Default)]
pub struct LoadingEllipsis {
    /// attach 时捕获的稳定前缀
    prefix: String,
    /// 帧计数器
    count: usize,
    /// 重复间隔计时器（None 表示已停止）
    interval: Option<Interval>,
}

impl LoadingEllipsis {
    /// 创建效果实例
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for LoadingEllipsis {
    fn name(&self) -> &'static str {
        "LoadingEllipsis"
    }

    fn on_attach(&mut self, element: &Element, _ctx: &mut EffectContext<'_>) {
        self.prefix = element.text();
        self.count = 0;
        self.interval = Some(Interval::new(defaults::ELLIPSIS_PERIOD));
    }

    fn on_detach(&mut self, _element: &Element, _ctx: &mut EffectContext<'_>) {
        // detach 内同步停止，之后的 update 不再有任何可观察效果
        self.interval = None;
    }

    fn update(&mut self, element: &Element, dt: f32, _ctx: &mut EffectContext<'_>) {
        let Some(interval) = self.interval.as_mut() else {
            return;
        };

        for _ in 0..interval.tick(dt) {
            let frame = defaults::ELLIPSIS_FRAMES[self.count % defaults::ELLIPSIS_FRAMES.len()];
            element.set_text(format!("{}{}", self.prefix, frame));
            self.count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLog;

    fn ctx(log: &mut DiagnosticLog) -> EffectContext<'_> {
        EffectContext { diagnostics: log }
    }

    /// 推进恰好一个周期
    fn one_period(effect: &mut LoadingEllipsis, el: &Element, log: &mut DiagnosticLog) {
        effect.update(el, defaults::ELLIPSIS_PERIOD, &mut ctx(log));
    }

    #[test]
    fn test_frames_cycle_over_prefix() {
        let el = Element::new("Loading");
        let mut log = DiagnosticLog::new();
        let mut ellipsis = LoadingEllipsis::new();

        ellipsis.on_attach(&el, &mut ctx(&mut log));
        // attach 本身不改写文本
        assert_eq!(el.text(), "Loading");

        one_period(&mut ellipsis, &el, &mut log);
        assert_eq!(el.text(), "Loading.");
        one_period(&mut ellipsis, &el, &mut log);
        assert_eq!(el.text(), "Loading..");
        one_period(&mut ellipsis, &el, &mut log);
        assert_eq!(el.text(), "Loading...");
        // 第四次回到单点
        one_period(&mut ellipsis, &el, &mut log);
        assert_eq!(el.text(), "Loading.");
    }

    #[test]
    fn test_sub_period_tick_does_not_fire() {
        let el = Element::new("Loading");
        let mut log = DiagnosticLog::new();
        let mut ellipsis = LoadingEllipsis::new();

        ellipsis.on_attach(&el, &mut ctx(&mut log));
        ellipsis.update(&el, defaults::ELLIPSIS_PERIOD / 2.0, &mut ctx(&mut log));
        assert_eq!(el.text(), "Loading");
    }

    #[test]
    fn test_large_dt_catches_up() {
        let el = Element::new("Loading");
        let mut log = DiagnosticLog::new();
        let mut ellipsis = LoadingEllipsis::new();

        ellipsis.on_attach(&el, &mut ctx(&mut log));
        // 一帧跨越两个周期：补触发两次，最终停在第二帧
        ellipsis.update(&el, defaults::ELLIPSIS_PERIOD * 2.0, &mut ctx(&mut log));
        assert_eq!(el.text(), "Loading..");
    }

    #[test]
    fn test_detach_stops_mutation() {
        let el = Element::new("Loading");
        let mut log = DiagnosticLog::new();
        let mut ellipsis = LoadingEllipsis::new();

        ellipsis.on_attach(&el, &mut ctx(&mut log));
        one_period(&mut ellipsis, &el, &mut log);
        let snapshot = el.text();

        ellipsis.on_detach(&el, &mut ctx(&mut log));
        // 再等一个完整周期，文本不变
        one_period(&mut ellipsis, &el, &mut log);
        assert_eq!(el.text(), snapshot);
    }

    #[test]
    fn test_restart_uses_independent_state() {
        let mut log = DiagnosticLog::new();

        // 第一个元素走完一帧后 detach
        let first = Element::new("Wait");
        let mut ellipsis = LoadingEllipsis::new();
        ellipsis.on_attach(&first, &mut ctx(&mut log));
        one_period(&mut ellipsis, &first, &mut log);
        assert_eq!(first.text(), "Wait.");
        ellipsis.on_detach(&first, &mut ctx(&mut log));

        // 新实例挂到第二个元素：前缀与计数互不干扰
        let second = Element::new("Loading");
        let mut ellipsis = LoadingEllipsis::new();
        ellipsis.on_attach(&second, &mut ctx(&mut log));
        one_period(&mut ellipsis, &second, &mut log);
        assert_eq!(second.text(), "Loading.");
        assert_eq!(first.text(), "Wait.");
    }
}
