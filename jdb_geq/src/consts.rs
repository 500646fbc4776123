//! Constants / 常量定义

/// Default error bound, the space-time trade-off of the index
/// 默认误差上界，索引的时空权衡参数
pub const DEFAULT_EPSILON: usize = 64;

/// Largest accepted epsilon. Bound points are `rank ± epsilon`, and hull cross
/// products multiply a key delta (< 2^64) by a rank delta, so both must stay far
/// below 2^63 to fit in i128.
/// 允许的最大 epsilon，保证凸包叉积不溢出 i128
pub const MAX_EPSILON: usize = 1 << 40;

/// Lower bound of the segment vector pre-allocation
/// 段向量预分配下限
pub const MIN_SEGMENT_CAP: usize = 16;

/// Upper bound of the segment vector pre-allocation
/// 段向量预分配上限
pub const MAX_SEGMENT_CAP: usize = 1 << 20;

/// Slack added above `pos + epsilon` to absorb prediction rounding
/// 窗口上界在 `pos + epsilon` 之外的余量，吸收预测取整误差
pub const WINDOW_SLACK: usize = 2;
