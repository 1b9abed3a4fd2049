/// 收藏中的一个乐高套装
///
/// 两个价格字段都用 `Option` 表达"未知/未定价"状态：
/// `rrp` 在 CSV 单元格为空时缺失，`price` 在成功抓取之前
/// 缺失，抓取失败则一直保持缺失。`price` 只会被持有该
/// 记录的那一个工作线程写入一次。
#[derive(Debug, Clone, PartialEq)]
pub struct LegoSet {
    /// BrickLink 目录编号（例如 "75192-1"）
    pub number: String,
    /// 套装名称
    pub name: String,
    /// 持有数量
    pub quantity: u32,
    /// 官方零售价（EUR）
    pub rrp: Option<f64>,
    /// 抓取到的市场均价（EUR）
    pub price: Option<f64>,
}

impl LegoSet {
    /// 单套盈亏：市场均价 − 零售价，任一缺失时为 None
    pub fn profit_per_set(&self) -> Option<f64> {
        Some(self.price? - self.rrp?)
    }
}
