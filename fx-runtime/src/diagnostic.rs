//! # 诊断模块
//!
//! 进程内诊断通道，不依赖 IO。
//!
//! ## 设计原则
//!
//! - 效果回调不得向调度循环抛出错误；一切需要上报的失败
//!   （目前只有播放启动失败）都记录为诊断条目
//! - 诊断分级：Error（失败）、Warn（建议关注）、Info（信息提示）
//! - 条目由 [`EffectRuntime`](crate::runtime::EffectRuntime) 收集，
//!   宿主可随时取走

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// 信息提示
    Info,
    /// 警告（建议关注）
    Warn,
    /// 错误（失败）
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 产生诊断的效果名
    pub effect: String,
    /// 诊断消息
    pub message: String,
    /// 诊断详情（可选，如底层失败原因）
    pub detail: Option<String>,
}

impl Diagnostic {
    /// 创建错误诊断
    pub fn error(effect: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            effect: effect.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 创建警告诊断
    pub fn warn(effect: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            effect: effect.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 创建信息诊断
    pub fn info(effect: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            effect: effect.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 设置详情
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.effect, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  | {}", detail)?;
        }
        Ok(())
    }
}

/// 诊断通道
///
/// 效果产生的诊断条目按序收集于此。
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    /// 诊断条目列表
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// 创建空通道
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加条目
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有条目
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// 错误级条目
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
    }

    /// 是否包含错误级条目
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// 取走所有条目，通道清空
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
