//! # Host CLI
//!
//! 无头演示宿主：创建元素、按名字附加效果、以固定节拍驱动运行时，
//! 展示 attach → update → detach 的完整宿主契约。
//!
//! 真实宿主的职责（渲染、路由、静态资源分发）不在本 crate 范围内；
//! 这里只把元素的可观察状态（文本、不透明度）在变化时打印出来。

use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use fx_runtime::{EffectRegistry, EffectRuntime, Element, RodioBackend};
use tracing::{info, warn};

mod config;

use config::ScenarioConfig;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "host-cli", about = "生命周期效果演示宿主")]
struct Args {
    /// 场景文件路径 (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 覆盖运行时长（秒）
    #[arg(long)]
    duration: Option<f32>,

    /// 覆盖元素初始文本
    #[arg(long)]
    text: Option<String>,

    /// 列出已注册的效果名后退出
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();

    // 配置优先级：命令行参数 > 场景文件 > 默认值
    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("无法加载场景文件 {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(duration) = args.duration {
        scenario.duration = duration;
    }
    if let Some(text) = args.text {
        scenario.text = text;
    }

    let registry =
        EffectRegistry::builtin(Rc::new(RodioBackend::new(scenario.assets_root.clone())));

    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut runtime = EffectRuntime::new(registry);
    let element = Element::new(scenario.text.clone());

    info!(text = %scenario.text, effects = ?scenario.effects, "场景开始");

    // 元素进入文档
    let mut bindings = Vec::new();
    for name in &scenario.effects {
        match runtime.attach(name, &element) {
            Ok(id) => bindings.push(id),
            Err(e) => warn!(effect = %name, error = %e, "跳过未注册的效果"),
        }
    }

    // 固定节拍驱动，观察到变化时打印一帧
    let tick = scenario.tick.max(0.001);
    let mut elapsed = 0.0f32;
    let mut last_frame = (element.text(), element.opacity());
    print_frame(elapsed, &element);
    while elapsed < scenario.duration {
        thread::sleep(Duration::from_secs_f32(tick));
        elapsed += tick;
        runtime.update(tick);

        let current = (element.text(), element.opacity());
        if current != last_frame {
            print_frame(elapsed, &element);
            last_frame = current;
        }
    }

    // 元素移除；淡出动画的视觉播放由真实宿主在移除前保留一段时间，
    // 这里直接打印最终状态
    for id in bindings {
        runtime.detach(id);
    }
    print_frame(elapsed, &element);

    // 上报收集到的诊断
    for diagnostic in runtime.take_diagnostics() {
        warn!(diagnostic = %diagnostic, "诊断条目");
    }

    info!("场景结束");
    Ok(())
}

/// 打印一帧可观察状态
fn print_frame(elapsed: f32, element: &Element) {
    println!(
        "[{:6.3}s] {:<16} opacity={:.2}",
        elapsed,
        element.text(),
        element.opacity()
    );
}
