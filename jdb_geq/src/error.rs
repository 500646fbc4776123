//! Error types / 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors. Queries never fail.
/// 构建错误，查询不会失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// Data is empty / 数据为空
  #[error("data cannot be empty")]
  EmptyData,

  /// `data[pos] > data[pos + 1]` / 数据未排序
  #[error("data must be sorted: data[{pos}] is greater than its successor")]
  NotSorted { pos: usize },

  /// Epsilon out of range / epsilon 超出范围
  #[error("epsilon must be <= {max} (provided: {provided})")]
  InvalidEpsilon { provided: usize, max: usize },
}
