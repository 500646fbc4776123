//! Segment building using Optimal Piecewise Linear Approximation
//! 使用最优分段线性逼近构建段
//!
//! Time Complexity: O(N)

use crate::{
  Segment,
  cone::{Cone, Step},
  consts::{MAX_SEGMENT_CAP, MIN_SEGMENT_CAP},
};

/// Points `(key, rank)` fed to the segmenter.
///
/// Only the first occurrence of a run of equal keys is a point. When a run ends
/// at `i` and the next key is more than one above it, `(key + 1, i)` is emitted
/// so absent keys in the gap are predicted near the end of the run.
/// 输入分段器的点 `(key, rank)`，重复键只取首次出现
pub(crate) fn points(data: &[u64]) -> impl Iterator<Item = (u64, usize)> + '_ {
  let n = data.len();
  let mut prev: Option<u64> = None;
  (0..n).filter_map(move |i| {
    let key = data[i];
    let run_tail = i > 0 && key == data[i - 1] && i + 1 < n && key != data[i + 1];
    let x = match key.checked_add(1) {
      Some(next) if run_tail && next != data[i + 1] => next,
      _ => key,
    };
    if prev == Some(x) {
      return None;
    }
    prev = Some(x);
    Some((x, i))
  })
}

/// Build the minimal set of segments predicting every first-occurrence rank
/// within `epsilon`. `data` must be sorted.
/// 构建最少数量的段，使每个键首次出现的排名误差不超过 `epsilon`
#[must_use]
pub fn build_segments(data: &[u64], epsilon: usize) -> Vec<Segment> {
  let n = data.len();
  if n == 0 {
    return vec![];
  }

  let cap = (n / epsilon.saturating_mul(2).max(1)).clamp(MIN_SEGMENT_CAP, MAX_SEGMENT_CAP);
  let mut segments = Vec::with_capacity(cap);
  let mut cone = Cone::new(epsilon);

  for (x, y) in points(data) {
    if cone.add(x, y) == Step::Close {
      segments.extend(cone.segment());
      cone.reset();
      cone.add(x, y);
    }
  }
  segments.extend(cone.segment());

  segments
}
