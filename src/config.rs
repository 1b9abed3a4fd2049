/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// BrickLink 站点根地址
    pub base_url: String,
    /// 抓价工作线程数量（每个线程独占一个浏览器会话）
    pub worker_count: usize,
    /// 单次页面渲染的超时秒数
    pub fetch_timeout_secs: u64,
    /// 浏览器可执行文件路径（不设置时由 chromiumoxide 自动探测）
    pub chrome_executable: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://www.bricklink.com".to_string(),
            worker_count: default_worker_count(),
            fetch_timeout_secs: 30,
            chrome_executable: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("BRICKLINK_BASE_URL").unwrap_or(default.base_url),
            worker_count: std::env::var("WORKER_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n >= 1)
                .unwrap_or(default.worker_count),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.fetch_timeout_secs),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
        }
    }
}

/// 默认工作线程数 = 可用的硬件并行度，下限为 1
fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
