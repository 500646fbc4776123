//! Linear segment / 线性段

#![allow(
  clippy::cast_precision_loss,
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss
)]

/// Line `rank = intercept + slope * (key - start_key)` valid over
/// `[start_key, next.start_key)`.
/// 线性段：在 `[start_key, next.start_key)` 上预测排名
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Segment {
  pub start_key: u64,
  pub slope: f64,
  pub intercept: f64,
}

impl Segment {
  #[inline]
  #[must_use]
  pub const fn new(start_key: u64, slope: f64, intercept: f64) -> Self {
    Self {
      start_key,
      slope,
      intercept,
    }
  }

  /// Terminal segment placed after the last key, predicting `len` everywhere
  /// 尾部哨兵段，任何键都预测为 `len`
  #[inline]
  #[must_use]
  pub fn sentinel(last_key: u64, len: usize) -> Self {
    Self::new(last_key.saturating_add(1), 0.0, len as f64)
  }

  /// Predicted rank of `key`. Keys below `start_key` predict the intercept.
  /// 预测键的排名，小于 `start_key` 的键返回截距
  #[inline(always)]
  #[must_use]
  pub fn predict(&self, key: u64) -> usize {
    let dx = key.saturating_sub(self.start_key) as f64;
    let pos = self.slope.mul_add(dx, self.intercept).round();
    // `as` saturates: NaN and negatives become 0
    pos as usize
  }

  /// Predicted rank at `start_key`
  /// `start_key` 处的预测排名
  #[inline(always)]
  #[must_use]
  pub fn base(&self) -> usize {
    self.intercept.round() as usize
  }
}
