use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 输入文件错误（致命：在任何抓取开始之前中止运行）
    Input(MalformedInputError),
    /// 页面抓取错误（可恢复：只影响单个套装）
    Scrape(ScrapeError),
    /// 浏览器会话错误
    Browser(BrowserError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Input(e) => write!(f, "输入错误: {}", e),
            AppError::Scrape(e) => write!(f, "抓取错误: {}", e),
            AppError::Browser(e) => write!(f, "浏览器错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Input(e) => Some(e),
            AppError::Scrape(e) => Some(e),
            AppError::Browser(e) => Some(e),
        }
    }
}

/// 输入文件错误
///
/// 收藏 CSV 中任何一个字段解析失败都会产生该错误，
/// 整个运行在抓取开始之前中止。
#[derive(Debug)]
pub enum MalformedInputError {
    /// 文件不可读
    Unreadable {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 表头缺少必需的列
    MissingColumn { column: &'static str },
    /// 某一行整体无法解析
    Row {
        row: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 某个字段的值无法解析
    Field {
        row: usize,
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInputError::Unreadable { path, source } => {
                write!(f, "无法读取收藏文件 {}: {}", path, source)
            }
            MalformedInputError::MissingColumn { column } => {
                write!(f, "表头缺少必需的列: {}", column)
            }
            MalformedInputError::Row { row, source } => {
                write!(f, "第 {} 行无法解析: {}", row, source)
            }
            MalformedInputError::Field {
                row,
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "第 {} 行字段 {} 解析失败: 值 '{}' 不是{}",
                    row, field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for MalformedInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MalformedInputError::Unreadable { source, .. }
            | MalformedInputError::Row { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 页面抓取错误
///
/// 提取规则依赖 BrickLink 未公开的页面结构，结构不符时
/// 按第一处不满足的步骤报错；网络/渲染失败和超时也折叠到
/// 这里，使"单个套装失败可恢复"的约定保持统一。
#[derive(Debug)]
pub enum ScrapeError {
    /// 页面上没有表格
    NoTable,
    /// 第一个表格没有行
    NoRow,
    /// 第一行没有单元格
    NoCell,
    /// 单元格文本中没有均价标记
    NoPrice,
    /// 均价数字无法解析
    BadPrice {
        value: String,
        source: std::num::ParseFloatError,
    },
    /// 页面渲染失败（导航、传输等）
    Render {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面渲染超时
    Timeout { url: String, limit_secs: u64 },
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::NoTable => write!(f, "页面上没有表格"),
            ScrapeError::NoRow => write!(f, "表格没有行"),
            ScrapeError::NoCell => write!(f, "行没有单元格"),
            ScrapeError::NoPrice => write!(f, "没有找到均价标记"),
            ScrapeError::BadPrice { value, source } => {
                write!(f, "均价 '{}' 无法解析: {}", value, source)
            }
            ScrapeError::Render { url, source } => {
                write!(f, "渲染 {} 失败: {}", url, source)
            }
            ScrapeError::Timeout { url, limit_secs } => {
                write!(f, "渲染 {} 超时 (限时 {} 秒)", url, limit_secs)
            }
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::BadPrice { source, .. } => Some(source),
            ScrapeError::Render { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 浏览器会话错误
#[derive(Debug)]
pub enum BrowserError {
    /// 浏览器配置失败
    ConfigurationFailed { message: String },
    /// 启动浏览器失败
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建页面失败
    PageCreationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::ConfigurationFailed { message } => {
                write!(f, "浏览器配置失败: {}", message)
            }
            BrowserError::LaunchFailed { source } => {
                write!(f, "启动浏览器失败: {}", source)
            }
            BrowserError::PageCreationFailed { source } => {
                write!(f, "创建页面失败: {}", source)
            }
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::LaunchFailed { source }
            | BrowserError::PageCreationFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<MalformedInputError> for AppError {
    fn from(err: MalformedInputError) -> Self {
        AppError::Input(err)
    }
}

impl From<ScrapeError> for AppError {
    fn from(err: ScrapeError) -> Self {
        AppError::Scrape(err)
    }
}

impl From<BrowserError> for AppError {
    fn from(err: BrowserError) -> Self {
        AppError::Browser(err)
    }
}

// ========== 便捷构造函数 ==========

impl ScrapeError {
    /// 创建页面渲染失败错误
    pub fn render_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ScrapeError::Render {
            url: url.into(),
            source: Box::new(source),
        }
    }
}

impl BrowserError {
    /// 创建浏览器启动失败错误
    pub fn launch_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        BrowserError::LaunchFailed {
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
