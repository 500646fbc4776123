//! Saturating bounds of the correction window
//! 纠错窗口的饱和边界

use crate::consts::WINDOW_SLACK;

/// Window start: `pos - epsilon`, floored at 0
/// 窗口起点：`pos - epsilon`，下限为 0
#[inline(always)]
#[must_use]
pub fn sub_eps(pos: usize, epsilon: usize) -> usize {
  pos.saturating_sub(epsilon)
}

/// Window end (exclusive): `pos + epsilon + 2`, capped at `size`
/// 窗口终点（不含）：`pos + epsilon + 2`，上限为 `size`
#[inline(always)]
#[must_use]
pub fn add_eps(pos: usize, epsilon: usize, size: usize) -> usize {
  pos
    .saturating_add(epsilon)
    .saturating_add(WINDOW_SLACK)
    .min(size)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sub_eps() {
    assert_eq!(sub_eps(0, 0), 0);
    assert_eq!(sub_eps(0, 8), 0);
    assert_eq!(sub_eps(8, 8), 0);
    assert_eq!(sub_eps(9, 8), 1);
    assert_eq!(sub_eps(usize::MAX, 1), usize::MAX - 1);
  }

  #[test]
  fn test_add_eps_boundaries() {
    let size = 100;
    assert_eq!(add_eps(0, 0, size), 2);
    assert_eq!(add_eps(0, 8, size), 10);
    assert_eq!(add_eps(size - 1, 0, size), size);
    assert_eq!(add_eps(size - 3, 0, size), size - 1);
    assert_eq!(add_eps(size, 0, size), size);
    assert_eq!(add_eps(size, 64, size), size);
  }

  #[test]
  fn test_add_eps_no_overflow() {
    assert_eq!(add_eps(usize::MAX, usize::MAX, 7), 7);
    assert_eq!(add_eps(usize::MAX - 1, 0, usize::MAX), usize::MAX);
  }

  #[test]
  fn test_window_contains_pos() {
    for size in 1..20usize {
      for pos in 0..=size {
        for eps in 0..4 {
          let lo = sub_eps(pos, eps);
          let hi = add_eps(pos, eps, size);
          assert!(lo <= pos.min(size));
          assert!(hi <= size);
          if pos < size {
            assert!(pos < hi, "pos={pos} eps={eps} size={size}");
          }
        }
      }
    }
  }
}
