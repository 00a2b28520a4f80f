//! # Timing 模块
//!
//! 基于宿主 tick 的计时原语。
//!
//! 单线程协作调度下没有后台定时器线程：所有等待都表达为
//! "由 `update(dt)` 消耗的已计划步骤"。本模块提供两种形态：
//!
//! - [`NextTick`]：一次性延迟步骤，下一个 tick 触发
//! - [`Interval`]：重复间隔计时器，dt 过大时补触发

/// 一次性延迟步骤
///
/// attach 中武装，下一个 `update` 消耗并触发一次。
/// detach 可随时撤销未消耗的步骤。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextTick {
    armed: bool,
}

impl NextTick {
    /// 创建未武装的步骤
    pub fn new() -> Self {
        Self::default()
    }

    /// 武装步骤
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// 撤销未消耗的步骤
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// 是否已武装
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// 消耗步骤
    ///
    /// # 返回
    /// - `true`: 步骤已武装，本次触发（并解除武装）
    /// - `false`: 无待触发步骤
    pub fn fire(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

/// 重复间隔计时器
///
/// 累计 `dt`，每满一个周期触发一次。周期必须为正。
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// 触发周期（秒）
    period: f32,
    /// 距上次触发累计的时间
    elapsed: f32,
}

impl Interval {
    /// 创建间隔计时器
    ///
    /// # 参数
    /// - `period`: 触发周期（秒），非正值按最小正周期处理
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// 获取触发周期
    pub fn period(&self) -> f32 {
        self.period
    }

    /// 推进计时器
    ///
    /// # 参数
    /// - `dt`: 距上次调用经过的时间（秒）
    ///
    /// # 返回
    /// 本次应触发的次数。dt 跨越多个周期时补触发多次，
    /// 保证长帧不丢步。
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        let mut fires = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fires += 1;
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_tick_fires_once() {
        let mut step = NextTick::new();
        assert!(!step.fire());

        step.arm();
        assert!(step.is_armed());
        assert!(step.fire());
        // 消耗后不再触发
        assert!(!step.fire());
    }

    #[test]
    fn test_next_tick_disarm() {
        let mut step = NextTick::new();
        step.arm();
        step.disarm();
        assert!(!step.fire());
    }

    #[test]
    fn test_interval_fires_at_period_boundary() {
        let mut interval = Interval::new(0.333);

        // 未满周期不触发
        assert_eq!(interval.tick(0.3), 0);
        // 累计满周期触发一次
        assert_eq!(interval.tick(0.04), 1);
        // 余量不足，继续累计
        assert_eq!(interval.tick(0.3), 0);
        assert_eq!(interval.tick(0.033), 1);
    }

    #[test]
    fn test_interval_catches_up_on_large_dt() {
        let mut interval = Interval::new(0.333);

        // 一帧跨越三个周期，补触发三次
        assert_eq!(interval.tick(1.0), 3);
    }

    #[test]
    fn test_interval_ignores_negative_dt() {
        let mut interval = Interval::new(0.333);
        interval.tick(0.3);
        assert_eq!(interval.tick(-5.0), 0);
        // 之前的累计不受影响
        assert_eq!(interval.tick(0.04), 1);
    }
}
