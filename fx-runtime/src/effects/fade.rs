//! # FadeInOut 效果
//!
//! attach 时淡入（0 → 1），detach 时淡出（→ 0）。

use crate::effect::{Effect, EffectContext};
use crate::element::{Element, Transition};
use crate::registry::defaults;
use crate::timing::NextTick;

/// 淡入淡出效果
///
/// ## 行为契约
///
/// - attach：配置 [`defaults::FADE_DURATION`] 的不透明度过渡，
///   立即写入不透明度 0.0，并武装一次延迟步骤；下一个 tick 写入 1.0。
///   先把控制权交还宿主一次，"完全透明"状态才能被渲染到，
///   淡入动画才可见。
/// - detach：撤销未消耗的延迟步骤，配置同样的过渡并写回 0.0。
///   元素本身不由本效果移除；淡出动画播放期间的保留与之后的清理
///   都是宿主的职责。
///
/// ## 边界情况
///
/// - 延迟步骤尚未执行就 detach：步骤被撤销，最终不透明度为 0.0
/// - 重复 detach：两次写入同一个 0.0，幂等
#[derive(Debug, Default)]
pub struct FadeInOut {
    /// 待执行的淡入步骤
    fade_in: NextTick,
}

impl FadeInOut {
    /// 创建效果实例
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for FadeInOut {
    fn name(&self) -> &'static str {
        "FadeInOut"
    }

    fn on_attach(&mut self, element: &Element, _ctx: &mut EffectContext<'_>) {
        element.set_transition(Transition::opacity(defaults::FADE_DURATION));
        element.set_opacity(0.0);
        self.fade_in.arm();
    }

    fn on_detach(&mut self, element: &Element, _ctx: &mut EffectContext<'_>) {
        self.fade_in.disarm();
        element.set_transition(Transition::opacity(defaults::FADE_DURATION));
        element.set_opacity(0.0);
    }

    fn update(&mut self, element: &Element, _dt: f32, _ctx: &mut EffectContext<'_>) {
        if self.fade_in.fire() {
            element.set_opacity(1.0);
        }
    }
}
