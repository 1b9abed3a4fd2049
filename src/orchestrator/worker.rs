//! 抓价工作线程 - 编排层
//!
//! 每个工作线程独占一个无头浏览器会话，顺序抓取自己
//! 分片内每个套装的价格并写回记录。

use std::time::Duration;

use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::HtmlRenderer;
use crate::models::LegoSet;
use crate::services::PriceFetcher;

/// 处理一个分片：逐个抓取价格并写回套装记录
///
/// 永远把分片完整地交还给调度方。浏览器启动失败或单个
/// 套装抓取失败都只会让对应的价格保持缺失，不会让整个
/// 运行失败。
///
/// # 参数
/// - `partition`: 本线程独占的套装分片
/// - `worker_index`: 工作线程编号（用于日志）
/// - `config`: 配置
pub async fn price_partition(
    mut partition: Vec<LegoSet>,
    worker_index: usize,
    config: &Config,
) -> Vec<LegoSet> {
    // 空分片不启动浏览器
    if partition.is_empty() {
        return partition;
    }

    let (mut browser, page) = match browser::launch_headless_browser(config).await {
        Ok(pair) => pair,
        Err(e) => {
            error!(
                "[工作线程 {}] ❌ 启动浏览器失败，本分片 {} 个套装保持未定价: {}",
                worker_index,
                partition.len(),
                e
            );
            return partition;
        }
    };

    let renderer = HtmlRenderer::new(page, Duration::from_secs(config.fetch_timeout_secs));
    let fetcher = PriceFetcher::new(&config.base_url);

    for set in partition.iter_mut() {
        info!(
            "[工作线程 {}] 正在抓取套装 {} ({}) 的价格...",
            worker_index, set.number, set.name
        );
        match fetcher.fetch(&renderer, &set.number).await {
            Ok(price) => {
                set.price = Some(price);
                info!(
                    "[工作线程 {}] ✓ {} 的市场均价: {:.2} EUR",
                    worker_index, set.name, price
                );
            }
            Err(e) => {
                warn!(
                    "[工作线程 {}] 抓取 {} 的价格失败: {}",
                    worker_index, set.name, e
                );
            }
        }
    }

    // 分片处理完毕即释放浏览器会话
    if let Err(e) = browser.close().await {
        warn!("[工作线程 {}] 关闭浏览器失败: {}", worker_index, e);
    }

    partition
}
