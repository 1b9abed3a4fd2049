//! 价格抓取 - 业务能力层
//!
//! 对 BrickLink 页面结构的所有假设都封闭在本模块内：
//! 对外只有"套装编号 → 价格或结构化失败"一个入口，
//! 以后若改用结构化 API，只需替换这里的提取逻辑，
//! 工作线程、分片和报表都不用动。

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::infrastructure::HtmlRenderer;

/// 均价在单元格文本中的标记前缀
const PRICE_MARKER: &str = "Avg Price: EUR ";

/// 价格抓取器
pub struct PriceFetcher {
    base_url: String,
}

impl PriceFetcher {
    /// 创建新的价格抓取器
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// 套装编号对应的 BrickLink 行情页 URL
    pub fn lookup_url(&self, number: &str) -> String {
        format!("{}/catalogPG.asp?S={}", self.base_url, number)
    }

    /// 抓取一个套装的市场均价
    pub async fn fetch(&self, renderer: &HtmlRenderer, number: &str) -> Result<f64, ScrapeError> {
        let url = self.lookup_url(number);
        debug!("正在渲染: {}", url);
        let html = renderer.render(&url).await?;
        extract_price(&html)
    }
}

/// 从渲染后的页面 HTML 中提取市场均价
///
/// 提取规则（依赖 BrickLink 未公开的页面结构）：
/// 第一个表格 → 其中第一行 → 其中第一个单元格 →
/// 单元格文本中 "Avg Price: EUR " 标记之后、换行之前的部分。
pub fn extract_price(html: &str) -> Result<f64, ScrapeError> {
    // 静态选择器，解析失败只可能是写错了字面量
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ScrapeError::NoTable)?;
    let row = table
        .select(&row_selector)
        .next()
        .ok_or(ScrapeError::NoRow)?;
    let cell = row
        .select(&cell_selector)
        .next()
        .ok_or(ScrapeError::NoCell)?;

    parse_price_text(&cell.text().collect::<String>())
}

/// 从单元格文本中取出标记后的价格数字
fn parse_price_text(content: &str) -> Result<f64, ScrapeError> {
    let start = content.find(PRICE_MARKER).ok_or(ScrapeError::NoPrice)? + PRICE_MARKER.len();
    let raw = content[start..].split('\n').next().unwrap_or("").trim();
    raw.parse::<f64>().map_err(|source| ScrapeError::BadPrice {
        value: raw.to_string(),
        source,
    })
}
