use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::BrowserError;

/// 启动无头浏览器并返回浏览器句柄和初始页面
///
/// 每个抓价工作线程调用一次，会话由调用方持有并在
/// 分片处理完毕后关闭。
pub async fn launch_headless_browser(config: &Config) -> Result<(Browser, Page), BrowserError> {
    debug!("🚀 启动无头浏览器...");

    // 配置无头浏览器
    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",
        "--no-sandbox",
        "--disable-dev-shm-usage",
        "--remote-debugging-port=0",
    ]);
    if let Some(executable) = &config.chrome_executable {
        builder = builder.chrome_executable(Path::new(executable));
    }
    let browser_config = builder.build().map_err(|message| {
        error!("配置无头浏览器失败: {}", message);
        BrowserError::ConfigurationFailed { message }
    })?;

    // 启动浏览器
    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        BrowserError::launch_failed(e)
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    // 创建初始页面
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        BrowserError::PageCreationFailed {
            source: Box::new(e),
        }
    })?;

    Ok((browser, page))
}
