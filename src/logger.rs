//! 日志初始化
//!
//! 日志全部写到 stderr，stdout 只留给报表输出。

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅者
///
/// 日志级别通过 `RUST_LOG` 环境变量控制，默认 `info`。
/// 重复调用是无害的（测试里会多次初始化）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
