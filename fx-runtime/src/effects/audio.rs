//! # PlaySong 效果
//!
//! attach 时开始播放固定音频资源（即发即忘），使用 rodio 库实现。
//!
//! ## 错误包含
//!
//! 播放启动失败（设备不可用、文件缺失、解码失败等）在产生点被
//! 完全包含：记录一条 Error 级诊断并写日志，绝不向调度循环传播。
//! attach 在任何音频子系统状态下都不会失败。

use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;
use tracing::{debug, error};

use crate::diagnostic::Diagnostic;
use crate::effect::{Effect, EffectContext};
use crate::element::Element;
use crate::registry::defaults;

/// 播放启动失败
///
/// 唯一的效果级错误类型。只在 [`PlaySong`] 的 attach 路径上产生，
/// 在产生点被捕获并记入诊断通道，不会抛出。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// 音频输出初始化失败
    #[error("音频输出初始化失败: {message}")]
    NoDevice { message: String },

    /// 音频文件无法打开
    #[error("无法打开音频文件 '{path}': {message}")]
    Open { path: String, message: String },

    /// 音频文件无法解码
    #[error("无法解码音频文件 '{path}': {message}")]
    Decode { path: String, message: String },

    /// 播放器创建失败
    #[error("无法创建音频播放器: {message}")]
    Sink { message: String },
}

/// 音频后端接口
///
/// 抽象播放启动，允许替换实现：
/// - [`RodioBackend`]：经由 rodio 的真实播放（默认）
/// - 测试中的桩实现：按需返回失败
///
/// ## 路径约定
///
/// `path` 是逻辑路径（相对资源根目录，`/` 分隔符），
/// 由具体后端解析到实际位置。
pub trait AudioBackend {
    /// 开始异步播放
    ///
    /// 成功返回后播放在后台继续；本调用不等待播放完成。
    fn play(&self, path: &str) -> Result<(), PlaybackError>;
}

/// rodio 音频后端
///
/// 输出流在首次播放时惰性初始化并缓存。输出流必须保持存活，
/// 否则已分离的播放会被切断；后端由注册表共享持有，
/// 所以播放可以在绑定 detach 之后继续。
pub struct RodioBackend {
    /// 资源根目录
    base_path: String,
    /// 惰性初始化的输出流（保持存活）与句柄
    output: RefCell<Option<(OutputStream, OutputStreamHandle)>>,
}

impl RodioBackend {
    /// 创建 rodio 后端
    ///
    /// # 参数
    /// - `base_path`: 资源根目录（如 `assets`）
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            output: RefCell::new(None),
        }
    }

    /// 解析音频路径
    fn resolve_path(&self, path: &str) -> String {
        if path.starts_with('/') || path.contains(':') {
            path.to_string()
        } else {
            format!("{}/{}", self.base_path, path)
        }
    }

    /// 创建一次性播放器（首次调用时初始化输出流）
    fn create_sink(&self) -> Result<Sink, PlaybackError> {
        let mut output = self.output.borrow_mut();
        if output.is_none() {
            let pair = OutputStream::try_default().map_err(|e| PlaybackError::NoDevice {
                message: e.to_string(),
            })?;
            *output = Some(pair);
        }

        match output.as_ref() {
            Some((_, handle)) => Sink::try_new(handle).map_err(|e| PlaybackError::Sink {
                message: e.to_string(),
            }),
            // 不可达：上面已确保初始化
            None => Err(PlaybackError::NoDevice {
                message: "输出流未初始化".to_string(),
            }),
        }
    }
}

impl AudioBackend for RodioBackend {
    fn play(&self, path: &str) -> Result<(), PlaybackError> {
        let full_path = self.resolve_path(path);

        let file = File::open(&full_path).map_err(|e| PlaybackError::Open {
            path: full_path.clone(),
            message: e.to_string(),
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
            path: full_path.clone(),
            message: e.to_string(),
        })?;

        let sink = self.create_sink()?;
        sink.append(source);
        sink.detach(); // 分离后自动播放完毕

        debug!(path = %full_path, "开始播放音频");
        Ok(())
    }
}

/// 歌曲播放效果
///
/// ## 行为契约
///
/// - attach：开始播放固定音频资源（[`defaults::SONG_PATH`]），
///   即发即忘。启动失败被捕获：记录一条 Error 级诊断并写日志，
///   attach 本身永远不会失败
/// - 无 detach 行为：元素移除后播放继续。这是签署过的已知限制，
///   不是待修复的疏漏
pub struct PlaySong {
    /// 共享的音频后端
    backend: Rc<dyn AudioBackend>,
}

impl PlaySong {
    /// 创建效果实例
    pub fn new(backend: Rc<dyn AudioBackend>) -> Self {
        Self { backend }
    }
}

impl Effect for PlaySong {
    fn name(&self) -> &'static str {
        "PlaySong"
    }

    fn on_attach(&mut self, _element: &Element, ctx: &mut EffectContext<'_>) {
        if let Err(e) = self.backend.play(defaults::SONG_PATH) {
            error!(path = defaults::SONG_PATH, error = %e, "播放启动失败");
            ctx.diagnostics
                .push(Diagnostic::error(self.name(), "播放启动失败").with_detail(e.to_string()));
        }
    }
}
