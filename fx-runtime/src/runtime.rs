//! # Runtime 模块
//!
//! 面向宿主的生命周期调度接口。
//!
//! 宿主在元素进入文档时调用 [`EffectRuntime::attach`]，
//! 移除元素时调用 [`EffectRuntime::detach`]，并以固定节拍调用
//! [`EffectRuntime::update`] 驱动效果的计时行为。
//!
//! ## 顺序保证
//!
//! - 同一绑定内：attach 先于 detach，detach 至多一次（宿主契约）
//! - 跨绑定：无顺序保证，效果按元素互相独立

use std::collections::HashMap;

use tracing::debug;

use crate::diagnostic::{Diagnostic, DiagnosticLog};
use crate::effect::{Effect, EffectContext};
use crate::element::Element;
use crate::error::{EffectError, EffectResult};
use crate::registry::EffectRegistry;

/// 绑定 ID
///
/// attach 时由 [`EffectRuntime`] 分配，保证唯一；
/// 宿主用它发起对应的 detach。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

impl BindingId {
    /// 创建新的绑定 ID（仅供 EffectRuntime 内部使用）
    fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部 ID 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BindingId({})", self.0)
    }
}

/// 一次 attach 产生的绑定
struct Binding {
    /// 绑定的元素句柄
    element: Element,
    /// 效果实例（效果私有状态都在其中）
    effect: Box<dyn Effect>,
}

/// 效果运行时
///
/// 持有注册表与所有存活绑定，收集效果产生的诊断条目。
pub struct EffectRuntime {
    /// 效果注册表
    registry: EffectRegistry,
    /// 存活绑定（BindingId -> 绑定）
    bindings: HashMap<BindingId, Binding>,
    /// 下一个绑定 ID
    next_binding_id: u64,
    /// 诊断通道
    diagnostics: DiagnosticLog,
}

impl std::fmt::Debug for EffectRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRuntime")
            .field("registry", &self.registry)
            .field("bindings", &self.bindings.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

impl EffectRuntime {
    /// 创建效果运行时
    pub fn new(registry: EffectRegistry) -> Self {
        Self {
            registry,
            bindings: HashMap::new(),
            next_binding_id: 1,
            diagnostics: DiagnosticLog::new(),
        }
    }

    /// 生成下一个绑定 ID
    fn next_binding_id(&mut self) -> BindingId {
        let id = BindingId::new(self.next_binding_id);
        self.next_binding_id += 1;
        id
    }

    /// 附加命名效果到元素
    ///
    /// 通过注册表工厂产生新的效果实例并调用其 `on_attach`。
    ///
    /// # 参数
    /// - `name`: 效果名（注册表识别的名称）
    /// - `element`: 目标元素句柄
    ///
    /// # 返回
    /// - `Ok(BindingId)`: 绑定建立，宿主用该 ID 发起 detach
    /// - `Err(EffectError::UnknownEffect)`: 效果名未注册
    pub fn attach(&mut self, name: &str, element: &Element) -> EffectResult<BindingId> {
        let mut effect =
            self.registry
                .instantiate(name)
                .ok_or_else(|| EffectError::UnknownEffect {
                    name: name.to_string(),
                })?;

        let id = self.next_binding_id();
        let mut ctx = EffectContext {
            diagnostics: &mut self.diagnostics,
        };
        effect.on_attach(element, &mut ctx);
        debug!(effect = name, binding = %id, "效果已附加");

        self.bindings.insert(id, Binding {
            element: element.clone(),
            effect,
        });
        Ok(id)
    }

    /// 分离绑定
    ///
    /// 调用效果的 `on_detach` 并丢弃其私有状态。
    /// 未知的绑定 ID（含重复 detach）静默忽略——宿主契约
    /// 禁止重复 detach，这里只保证不出错。
    pub fn detach(&mut self, id: BindingId) {
        if let Some(mut binding) = self.bindings.remove(&id) {
            let mut ctx = EffectContext {
                diagnostics: &mut self.diagnostics,
            };
            binding.effect.on_detach(&binding.element, &mut ctx);
            debug!(effect = binding.effect.name(), binding = %id, "效果已分离");
        }
    }

    /// 推进所有绑定的计时行为
    ///
    /// # 参数
    /// - `dt`: 距上个 tick 经过的时间（秒）
    pub fn update(&mut self, dt: f32) {
        let diagnostics = &mut self.diagnostics;
        for binding in self.bindings.values_mut() {
            let mut ctx = EffectContext {
                diagnostics: &mut *diagnostics,
            };
            binding.effect.update(&binding.element, dt, &mut ctx);
        }
    }

    // ========== 查询方法 ==========

    /// 绑定是否存活
    pub fn is_attached(&self, id: BindingId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// 存活绑定数量
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// 访问注册表
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// 查看已收集的诊断条目
    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// 取走已收集的诊断条目，通道清空
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
