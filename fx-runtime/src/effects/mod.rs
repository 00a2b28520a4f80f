//! # Effects 模块（内置效果定义）
//!
//! 三个内置效果，对应注册表识别的三个效果名：
//!
//! - [`FadeInOut`]：attach 淡入、detach 淡出
//! - [`LoadingEllipsis`]：文本后循环追加省略号
//! - [`PlaySong`]：attach 时开始播放固定音频资源
//!
//! 效果名与默认参数的唯一来源在
//! [`registry`](crate::registry) 模块，这里只有行为实现。

pub mod audio;
pub mod ellipsis;
pub mod fade;

pub use audio::{AudioBackend, PlaySong, PlaybackError, RodioBackend};
pub use ellipsis::LoadingEllipsis;
pub use fade::FadeInOut;
