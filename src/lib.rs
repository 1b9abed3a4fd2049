//! # Brick Price Report
//!
//! 一个乐高收藏估价工具：读取 Brickset 导出的收藏 CSV，
//! 用无头浏览器渲染 BrickLink 行情页抓取每个套装的市场均价，
//! 最后输出盈亏报表。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `HtmlRenderer` - 唯一的 page owner，提供 render() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个套装
//! - `PriceFetcher` - 套装编号 → 市场均价的抓取能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/partition` - 轮询分片（无共享可变状态的前提）
//! - `orchestrator/worker` - 单个分片的抓价工作线程
//! - `orchestrator/app` - 应用生命周期：加载 → 派发 → 汇总
//!
//! ### ④ 输出层
//! - `report` - 纯函数生成对齐的盈亏报表
//!
//! ## 数据流
//!
//! ```text
//! csv_loader (Vec<LegoSet>)
//!     ↓
//! partition::split_round_robin (Vec<Vec<LegoSet>>)
//!     ↓
//! worker::price_partition × N（每个工作线程独占一个浏览器会话）
//!     ↓
//! partition::merge_round_robin（恢复原始顺序）
//!     ↓
//! report::render_report
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod services;

// 重新导出常用类型
pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{AppError, AppResult, MalformedInputError, ScrapeError};
pub use infrastructure::HtmlRenderer;
pub use models::{load_collection, LegoSet};
pub use orchestrator::App;
pub use report::render_report;
pub use services::PriceFetcher;
