//! nextGEQ index over a borrowed sorted array
//! 基于借用的有序数组的 nextGEQ 索引

#![allow(clippy::cast_precision_loss)]

use std::mem::size_of;

use log::debug;

use crate::{
  Error, Result, Segment,
  build::build_segments,
  clamp::{add_eps, sub_eps},
  consts::MAX_EPSILON,
};

/// Index statistics
/// 索引统计信息
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
  pub segments: usize,
  pub avg_segment_size: f64,
  pub memory_bytes: usize,
}

/// Error-bounded piecewise linear index answering nextGEQ queries.
///
/// The index does not own the keys: it borrows the sorted array for `'a` and is
/// unusable once the array is dropped or resized, which the borrow enforces.
/// Built once, never modified; `&Index` can be shared by any number of readers.
///
/// 误差有界的分段线性索引。不持有数据，借用有序数组 `'a`，数组释放或修改后索引即失效。
/// 构建后不可变，可被多个读者并发共享。
#[derive(Clone, Debug)]
pub struct Index<'a> {
  epsilon: usize,
  data: &'a [u64],
  /// Real segments followed by the sentinel
  segments: Vec<Segment>,
}

impl<'a> Index<'a> {
  /// Build from sorted keys (O(N))
  /// 从已排序的键构建索引
  ///
  /// # Errors
  /// Returns `Error::InvalidEpsilon` if epsilon > `MAX_EPSILON`
  /// Returns `Error::EmptyData` if data is empty
  /// Returns `Error::NotSorted` if `check_sorted` is true and data is not sorted
  pub fn new(data: &'a [u64], epsilon: usize, check_sorted: bool) -> Result<Self> {
    if epsilon > MAX_EPSILON {
      return Err(Error::InvalidEpsilon {
        provided: epsilon,
        max: MAX_EPSILON,
      });
    }
    let Some(&last) = data.last() else {
      return Err(Error::EmptyData);
    };
    if check_sorted && let Some(pos) = data.windows(2).position(|w| w[0] > w[1]) {
      return Err(Error::NotSorted { pos });
    }

    let mut segments = build_segments(data, epsilon);
    debug!(
      "geq index built: n={}, epsilon={epsilon}, segments={}",
      data.len(),
      segments.len()
    );
    segments.push(Segment::sentinel(last, data.len()));

    Ok(Self {
      epsilon,
      data,
      segments,
    })
  }

  /// Smallest element `>= key`, `None` when every element is smaller
  /// 返回第一个 `>= key` 的元素，不存在时返回 `None`
  #[inline]
  #[must_use]
  pub fn next_geq(&self, key: u64) -> Option<u64> {
    self.data.get(self.lower_bound(key)).copied()
  }

  /// Batch lookup returning an iterator
  /// 批量查找（返回迭代器）
  #[inline]
  pub fn next_geq_many<'b, I>(&'b self, keys: I) -> impl Iterator<Item = Option<u64>> + 'b
  where
    I: IntoIterator<Item = u64> + 'b,
    <I as IntoIterator>::IntoIter: 'b,
  {
    keys.into_iter().map(move |k| self.next_geq(k))
  }

  /// Position of the first element `>= key`, `len()` when there is none
  /// 第一个 `>= key` 的元素位置，不存在时返回 `len()`
  #[inline]
  #[must_use]
  pub fn lower_bound(&self, key: u64) -> usize {
    let n = self.data.len();
    // Above the maximum the window may not reach `n`
    if key > self.data[n - 1] {
      return n;
    }
    let (lo, hi) = self.predict_range(key);
    lo + self.data[lo..hi].partition_point(|&v| v < key)
  }

  /// Clamped predicted position of `key`, within `epsilon` of its rank
  /// 键的预测位置（已截断）
  #[inline]
  #[must_use]
  pub fn predict(&self, key: u64) -> usize {
    let i = self.find_seg(key);
    // `i + 1` exists: the sentinel follows every real segment
    let next = &self.segments[i + 1];
    self.segments[i].predict(key).min(next.base())
  }

  /// Search window `[start, end)` for `key`
  /// 键的搜索范围 `[start, end)`
  #[inline]
  #[must_use]
  pub fn predict_range(&self, key: u64) -> (usize, usize) {
    let pos = self.predict(key);
    let hi = add_eps(pos, self.epsilon, self.data.len());
    (sub_eps(pos, self.epsilon).min(hi), hi)
  }

  /// Rightmost real segment with `start_key <= key`, or the first one
  /// 查找键所属的段
  #[inline]
  fn find_seg(&self, key: u64) -> usize {
    let real = &self.segments[..self.segments.len() - 1];
    real.partition_point(|s| s.start_key <= key).saturating_sub(1)
  }

  /// Memory footprint of the index, the borrowed data excluded
  /// 索引内存占用（不含数据）
  #[inline]
  #[must_use]
  pub fn size_in_bytes(&self) -> usize {
    size_of::<Self>() + self.segments.len() * size_of::<Segment>()
  }

  /// Real segments, sentinel excluded
  /// 实际段（不含哨兵）
  #[inline]
  #[must_use]
  pub fn segments(&self) -> &[Segment] {
    &self.segments[..self.segments.len() - 1]
  }

  #[inline]
  #[must_use]
  pub fn segment_count(&self) -> usize {
    self.segments.len() - 1
  }

  #[inline]
  #[must_use]
  pub fn avg_segment_size(&self) -> f64 {
    self.data.len() as f64 / self.segment_count().max(1) as f64
  }

  #[inline]
  #[must_use]
  pub fn epsilon(&self) -> usize {
    self.epsilon
  }

  /// Data length
  /// 数据长度
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Borrowed keys
  /// 借用的键
  #[inline]
  #[must_use]
  pub fn data(&self) -> &'a [u64] {
    self.data
  }

  #[must_use]
  pub fn stats(&self) -> Stats {
    Stats {
      segments: self.segment_count(),
      avg_segment_size: self.avg_segment_size(),
      memory_bytes: self.size_in_bytes(),
    }
  }
}
