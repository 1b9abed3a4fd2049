//! 应用主体 - 编排层
//!
//! ## 职责
//!
//! 1. **加载收藏**：抓取开始之前完整读入 CSV（加载失败是致命错误）
//! 2. **轮询分片**：把收藏拆成 worker_count 个互不相交的分片
//! 3. **并发派发**：每个分片一个 tokio 任务，各自独占浏览器会话
//! 4. **完整屏障**：等待全部工作线程结束，任何分片都不丢失
//! 5. **汇总报表**：按原始顺序合并后输出到 stdout

use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{load_collection, LegoSet};
use crate::orchestrator::partition::{merge_round_robin, split_round_robin};
use crate::orchestrator::worker;
use crate::report::render_report;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self { config }
    }

    /// 运行完整流水线：加载 → 分片 → 并发抓价 → 汇总报表
    pub async fn run(&self, collection_file: &Path) -> Result<()> {
        let collection = load_collection(collection_file)?;
        info!("📋 共 {} 个套装待定价", collection.len());

        let priced = self.fetch_prices(collection).await;

        // 报表走 stdout，日志走 stderr，两者互不干扰
        println!("{}", render_report(&priced));

        log_completion(&priced);
        Ok(())
    }

    /// 把收藏轮询分片后派发给工作线程，全部结束后按原顺序合并
    async fn fetch_prices(&self, collection: Vec<LegoSet>) -> Vec<LegoSet> {
        let worker_count = self.config.worker_count.max(1);
        let partitions = split_round_robin(collection, worker_count);
        // 任务 panic 时用未定价的副本兜底，报表不丢行
        let fallback = partitions.clone();

        let mut handles = Vec::with_capacity(worker_count);
        for (worker_index, partition) in partitions.into_iter().enumerate() {
            let config = self.config.clone();
            handles.push(tokio::spawn(async move {
                worker::price_partition(partition, worker_index, &config).await
            }));
        }

        // 完整屏障：等待每一个工作线程结束
        let mut priced = Vec::with_capacity(worker_count);
        for (worker_index, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(partition) => priced.push(partition),
                Err(e) => {
                    error!("[工作线程 {}] 任务执行失败: {}", worker_index, e);
                    priced.push(fallback[worker_index].clone());
                }
            }
        }

        merge_round_robin(priced)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 乐高收藏估价");
    info!(
        "🕒 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 工作线程数: {}", config.worker_count);
    info!("🌐 目标站点: {}", config.base_url);
    info!("{}", "=".repeat(60));
}

fn log_completion(sets: &[LegoSet]) {
    let priced = sets.iter().filter(|s| s.price.is_some()).count();
    info!("{}", "=".repeat(60));
    info!("✅ 抓取完成: 成功定价 {}/{}", priced, sets.len());
    if priced < sets.len() {
        info!("❌ 未定价: {}", sets.len() - priced);
    }
    info!("{}", "=".repeat(60));
}
