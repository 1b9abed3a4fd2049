use anyhow::Result;
use brick_price_report::{logger, App, Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 唯一的命令行参数：收藏 CSV 文件路径
    let collection_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("用法: brick_price_report <collection.csv>"))?;

    // 初始化并运行应用
    App::initialize(config).run(&collection_file).await?;

    Ok(())
}
