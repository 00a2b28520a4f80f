//! # 生命周期集成测试
//!
//! 测试 Host 视角的完整链路：注册表 → attach → update 节拍 → detach。
//! 这些测试不依赖真实的音频设备。

use std::cell::RefCell;
use std::rc::Rc;

use fx_runtime::{
    AudioBackend, DiagnosticLevel, EffectRegistry, EffectRuntime, Element, PlaybackError, defaults,
};

/// 测试用音频后端：按需失败，记录播放请求
struct StubBackend {
    fail: bool,
    played: RefCell<Vec<String>>,
}

impl StubBackend {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            played: RefCell::new(Vec::new()),
        }
    }
}

impl AudioBackend for StubBackend {
    fn play(&self, path: &str) -> Result<(), PlaybackError> {
        if self.fail {
            return Err(PlaybackError::NoDevice {
                message: "无输出设备".to_string(),
            });
        }
        self.played.borrow_mut().push(path.to_string());
        Ok(())
    }
}

fn test_runtime(fail_audio: bool) -> EffectRuntime {
    EffectRuntime::new(EffectRegistry::builtin(Rc::new(StubBackend::new(
        fail_audio,
    ))))
}

/// 记录一帧的可观察状态
fn frame(label: &str, element: &Element) -> String {
    format!("{:<12}| {} | {:.1}", label, element.text(), element.opacity())
}

/// 测试加载元素的完整生命周期（省略号 + 淡入淡出并存）
#[test]
fn test_loading_element_full_lifecycle() {
    let mut runtime = test_runtime(false);
    let element = Element::new("Loading");
    let mut timeline = Vec::new();

    // 元素进入文档：挂两个效果
    let fade = runtime
        .attach("FadeInOut", &element)
        .unwrap_or_else(|e| panic!("attach 失败: {e}"));
    let ellipsis = runtime
        .attach("LoadingEllipsis", &element)
        .unwrap_or_else(|e| panic!("attach 失败: {e}"));
    timeline.push(frame("attach", &element));

    // 四个完整周期：淡入在第一个 tick 完成，省略号循环一圈回到单点
    for n in 1..=4 {
        runtime.update(defaults::ELLIPSIS_PERIOD);
        timeline.push(frame(&format!("tick {n}"), &element));
    }

    // 元素移除：两个绑定都分离
    runtime.detach(ellipsis);
    runtime.detach(fade);
    timeline.push(frame("detach", &element));

    // 再过一个周期：元素完全静止
    runtime.update(defaults::ELLIPSIS_PERIOD);
    timeline.push(frame("idle", &element));

    insta::assert_snapshot!(timeline.join("\n"), @r"
    attach      | Loading | 0.0
    tick 1      | Loading. | 1.0
    tick 2      | Loading.. | 1.0
    tick 3      | Loading... | 1.0
    tick 4      | Loading. | 1.0
    detach      | Loading. | 0.0
    idle        | Loading. | 0.0
    ");

    assert_eq!(runtime.binding_count(), 0);
    assert!(runtime.diagnostics().is_empty());
}

/// 测试播放失败经由公共 API 上报为诊断
#[test]
fn test_song_failure_reported_through_runtime() {
    let mut runtime = test_runtime(true);
    let element = Element::new("");

    let result = runtime.attach("PlaySong", &element);
    assert!(result.is_ok());

    let diagnostics = runtime.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].level, DiagnosticLevel::Error);
    assert_eq!(diagnostics[0].effect, "PlaySong");
}

/// 测试播放成功时请求的是固定资源
#[test]
fn test_song_plays_fixed_resource() {
    let backend = Rc::new(StubBackend::new(false));
    let mut runtime = EffectRuntime::new(EffectRegistry::builtin(backend.clone()));
    let element = Element::new("");

    let result = runtime.attach("PlaySong", &element);
    assert!(result.is_ok());
    assert_eq!(backend.played.borrow().as_slice(), [defaults::SONG_PATH]);
    assert!(runtime.diagnostics().is_empty());
}

/// 测试 detach 后元素完全静止（快照对比）
#[test]
fn test_detached_element_is_inert() {
    let mut runtime = test_runtime(false);
    let element = Element::new("Wait");

    let id = runtime
        .attach("LoadingEllipsis", &element)
        .unwrap_or_else(|e| panic!("attach 失败: {e}"));
    runtime.update(defaults::ELLIPSIS_PERIOD);
    assert_eq!(element.text(), "Wait.");

    runtime.detach(id);
    let snapshot = (element.text(), element.opacity());

    // 多等几个周期，无任何可观察变化
    for _ in 0..5 {
        runtime.update(defaults::ELLIPSIS_PERIOD);
    }
    assert_eq!((element.text(), element.opacity()), snapshot);
}
