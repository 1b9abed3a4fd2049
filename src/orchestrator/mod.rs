//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责并发调度和应用生命周期，是整个流水线的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `partition` - 轮询分片
//! - 把收藏拆成互不相交的分片（元素 i → 分片 i % n）
//! - 抓取结束后按原始顺序合并
//!
//! ### `worker` - 抓价工作线程
//! - 独占一个无头浏览器会话
//! - 顺序处理自己分片内的套装
//! - 单个套装失败只记日志，不中断分片
//!
//! ### `app` - 应用主体
//! - 加载收藏、派发工作线程、等待全部完成、输出报表
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<LegoSet>)
//!     ↓
//! worker (处理一个分片)
//!     ↓
//! services::PriceFetcher (处理单个套装)
//!     ↓
//! infrastructure::HtmlRenderer (渲染页面)
//! ```
//!
//! ## 并发不变量
//!
//! 分片互不相交且每个分片被 move 进自己的工作线程，
//! 所以价格写入不需要任何锁；报表只在全部工作线程
//! 结束（完整屏障）之后运行。

pub mod app;
pub mod partition;
pub mod worker;

// 重新导出主要类型
pub use app::App;
pub use partition::{merge_round_robin, split_round_robin};
pub use worker::price_partition;
