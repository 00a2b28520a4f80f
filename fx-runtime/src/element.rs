//! # Element 模块
//!
//! 宿主托管元素的共享句柄。
//!
//! ## 宿主契约
//!
//! 宿主保证每个托管元素提供：
//! - 可变的文本内容属性
//! - 可变的不透明度样式属性（0.0 - 1.0）
//! - 可选的不透明度过渡样式
//! - 在 attach/detach 生命周期内稳定的身份
//!
//! ## 设计说明
//!
//! 采用 `Rc<RefCell<T>>` 内部可变性模式：
//! 句柄可以被宿主与效果实例同时持有，单线程协作调度下无借用冲突。
//! 克隆句柄共享同一份元素数据，身份即底层分配。

use std::cell::RefCell;
use std::rc::Rc;

/// 不透明度过渡样式
///
/// 描述"不透明度变化应在多长时间内播放"。实际的视觉插值由宿主渲染层
/// 负责；效果只写入该样式与目标不透明度。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// 过渡时长（秒）
    pub duration: f32,
}

impl Transition {
    /// 创建不透明度过渡
    pub fn opacity(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
        }
    }
}

/// 元素内部数据
#[derive(Debug, Clone)]
struct ElementData {
    /// 文本内容
    text: String,
    /// 不透明度（0.0 完全透明 - 1.0 完全不透明）
    opacity: f32,
    /// 当前配置的不透明度过渡（None 表示瞬间切换）
    transition: Option<Transition>,
}

/// 宿主托管元素句柄
///
/// 新建元素完全不透明、无过渡配置。
#[derive(Debug, Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

impl Element {
    /// 创建元素
    ///
    /// # 参数
    /// - `text`: 初始文本内容
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                text: text.into(),
                opacity: 1.0,
                transition: None,
            })),
        }
    }

    /// 获取文本内容
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// 设置文本内容
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = text.into();
    }

    /// 获取不透明度
    pub fn opacity(&self) -> f32 {
        self.inner.borrow().opacity
    }

    /// 设置不透明度（限制在 0.0 - 1.0）
    pub fn set_opacity(&self, opacity: f32) {
        self.inner.borrow_mut().opacity = opacity.clamp(0.0, 1.0);
    }

    /// 获取当前过渡配置
    pub fn transition(&self) -> Option<Transition> {
        self.inner.borrow().transition
    }

    /// 设置过渡配置
    pub fn set_transition(&self, transition: Transition) {
        self.inner.borrow_mut().transition = Some(transition);
    }

    /// 清除过渡配置（后续不透明度写入瞬间生效）
    pub fn clear_transition(&self) {
        self.inner.borrow_mut().transition = None;
    }

    /// 身份比较
    ///
    /// 两个句柄指向同一份元素数据时为 true。克隆句柄保持身份不变，
    /// 满足"attach/detach 生命周期内身份稳定"的宿主契约。
    pub fn same_identity(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
