//! 页面渲染器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"渲染页面"的能力

use std::future::Future;
use std::time::Duration;

use chromiumoxide::Page;
use tokio::time::timeout;

use crate::error::ScrapeError;

/// 页面渲染器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 render() 能力：URL → 渲染后的完整 HTML
/// - 不认识 LegoSet，不处理业务流程
///
/// 导航、等待和取内容整体受超时约束，超时和传输失败都
/// 以 `ScrapeError` 的形式返回，对调用方而言与页面结构
/// 不符是同一类可恢复失败。
pub struct HtmlRenderer {
    page: Page,
    fetch_timeout: Duration,
}

impl HtmlRenderer {
    /// 创建新的页面渲染器
    pub fn new(page: Page, fetch_timeout: Duration) -> Self {
        Self {
            page,
            fetch_timeout,
        }
    }

    /// 渲染指定 URL 并返回完整的文档 HTML
    pub async fn render(&self, url: &str) -> Result<String, ScrapeError> {
        let navigate = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            self.page.content().await
        };
        with_deadline(navigate, url, self.fetch_timeout).await
    }
}

/// 给渲染 future 加上超时约束
///
/// 超时返回 `ScrapeError::Timeout`，渲染本身的失败折叠为
/// `ScrapeError::Render`，两者对调用方都是可恢复的单项失败。
pub async fn with_deadline<F, E>(
    navigate: F,
    url: &str,
    limit: Duration,
) -> Result<String, ScrapeError>
where
    F: Future<Output = Result<String, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    match timeout(limit, navigate).await {
        Ok(Ok(html)) => Ok(html),
        Ok(Err(e)) => Err(ScrapeError::render_failed(url, e)),
        Err(_) => Err(ScrapeError::Timeout {
            url: url.to_string(),
            limit_secs: limit.as_secs(),
        }),
    }
}
