//! # Registry 模块
//!
//! 效果注册表：效果名到效果工厂的只读映射。
//! 这是所有效果名称、默认参数的**唯一来源**。
//!
//! ## 设计原则
//!
//! - **唯一来源**：效果名与默认参数只在本模块定义，
//!   其它地方不得硬编码
//! - **一次构建**：注册表在进程启动时构建一次，此后只读
//! - **实例独立**：每次 attach 通过工厂产生独立的效果实例，
//!   实例之间不共享任何状态

use std::collections::HashMap;
use std::rc::Rc;

use crate::effect::Effect;
use crate::effects::audio::{AudioBackend, PlaySong, RodioBackend};
use crate::effects::ellipsis::LoadingEllipsis;
use crate::effects::fade::FadeInOut;

/// 各效果的默认参数
///
/// 这些常量是效果参数的**唯一来源**，任何需要默认参数的地方
/// 都应使用这些常量，而非硬编码数字。
pub mod defaults {
    /// FadeInOut 不透明度过渡时长（秒）
    pub const FADE_DURATION: f32 = 0.5;
    /// LoadingEllipsis 帧间隔（秒）
    pub const ELLIPSIS_PERIOD: f32 = 0.333;
    /// LoadingEllipsis 帧序列
    pub const ELLIPSIS_FRAMES: [&str; 3] = [".", "..", "..."];
    /// PlaySong 播放的音频资源（逻辑路径，相对资源根目录）
    pub const SONG_PATH: &str = "audio/song.m4a";
    /// 默认资源根目录
    pub const ASSETS_ROOT: &str = "assets";
}

/// 效果工厂
type EffectFactory = Box<dyn Fn() -> Box<dyn Effect>>;

/// 效果注册表
///
/// 识别的效果名：
///
/// | 名称 | 效果 |
/// |------|------|
/// | `"FadeInOut"` | attach 淡入、detach 淡出 |
/// | `"LoadingEllipsis"` | 文本后循环追加省略号 |
/// | `"PlaySong"` | attach 时开始播放固定音频资源 |
pub struct EffectRegistry {
    factories: HashMap<&'static str, EffectFactory>,
}

impl EffectRegistry {
    /// 构建内置注册表
    ///
    /// # 参数
    /// - `audio`: PlaySong 使用的音频后端（由所有 PlaySong 实例共享，
    ///   播放因此可以在绑定 detach 之后继续）
    pub fn builtin(audio: Rc<dyn AudioBackend>) -> Self {
        let mut factories: HashMap<&'static str, EffectFactory> = HashMap::new();

        factories.insert(
            "FadeInOut",
            Box::new(|| Box::new(FadeInOut::new()) as Box<dyn Effect>),
        );
        factories.insert(
            "LoadingEllipsis",
            Box::new(|| Box::new(LoadingEllipsis::new()) as Box<dyn Effect>),
        );
        factories.insert(
            "PlaySong",
            Box::new(move || Box::new(PlaySong::new(audio.clone())) as Box<dyn Effect>),
        );

        Self { factories }
    }

    /// 使用默认音频后端构建内置注册表
    ///
    /// 默认后端从 [`defaults::ASSETS_ROOT`] 解析音频资源。
    pub fn with_default_audio() -> Self {
        Self::builtin(Rc::new(RodioBackend::new(defaults::ASSETS_ROOT)))
    }

    /// 查找效果工厂并实例化
    ///
    /// # 返回
    /// - `Some(effect)`: 新的效果实例
    /// - `None`: 效果名未注册
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Effect>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// 是否包含指定效果名
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 已注册的效果名（按字典序）
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// 注册的效果数量
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("names", &self.names())
            .finish()
    }
}
