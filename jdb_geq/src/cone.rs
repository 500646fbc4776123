//! Feasible region of the optimal piecewise linear approximation
//! 最优分段线性逼近的可行域
//!
//! Each point `(x, y)` adds the band `[y - eps, y + eps]` at `x`. The region is
//! the set of lines crossing every band seen since the segment began. It is kept
//! as two convex hulls (upper bound points, lower bound points) plus the
//! rectangle whose diagonals are the min-slope and max-slope feasible lines.
//! Amortized O(1) per point. All geometry is exact (i128).

#![allow(
  clippy::cast_precision_loss,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap
)]

use std::{cmp::Ordering, ops::Sub};

use crate::Segment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Point {
  x: i128,
  y: i128,
}

impl Sub for Point {
  type Output = Slope;

  #[inline(always)]
  fn sub(self, rhs: Self) -> Slope {
    Slope {
      dx: self.x - rhs.x,
      dy: self.y - rhs.y,
    }
  }
}

/// Direction `dy / dx`. Compared values always share the sign of `dx`.
#[derive(Clone, Copy, Debug)]
struct Slope {
  dx: i128,
  dy: i128,
}

impl Slope {
  #[inline(always)]
  fn as_f64(self) -> f64 {
    self.dy as f64 / self.dx as f64
  }
}

impl PartialEq for Slope {
  #[inline(always)]
  fn eq(&self, other: &Self) -> bool {
    self.dy * other.dx == other.dy * self.dx
  }
}

impl PartialOrd for Slope {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some((self.dy * other.dx).cmp(&(other.dy * self.dx)))
  }
}

#[inline(always)]
fn cross(o: Point, a: Point, b: Point) -> i128 {
  let oa = a - o;
  let ob = b - o;
  oa.dx * ob.dy - oa.dy * ob.dx
}

/// Feasible region state
/// 可行域状态
#[derive(Clone, Copy, Debug)]
enum Region {
  Empty,
  /// One point: its upper and lower bound points
  Seeded { upper: Point, lower: Point },
  /// `[upper_old, lower_old, lower_new, upper_new]`:
  /// `r0 -> r2` is the min-slope line, `r1 -> r3` the max-slope line
  Bounded([Point; 4]),
}

/// Outcome of offering a point to the region
/// 向可行域添加点的结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
  /// The point fits, the segment grows
  Accept,
  /// No line fits every band any more; the region is left untouched
  Close,
}

/// Incremental feasible region of the in-progress segment
/// 当前段的增量可行域
#[derive(Debug)]
pub struct Cone {
  epsilon: i128,
  region: Region,
  first_x: u64,
  upper: Vec<Point>,
  lower: Vec<Point>,
  upper_start: usize,
  lower_start: usize,
}

impl Cone {
  #[must_use]
  pub fn new(epsilon: usize) -> Self {
    Self {
      epsilon: epsilon as i128,
      region: Region::Empty,
      first_x: 0,
      upper: Vec::new(),
      lower: Vec::new(),
      upper_start: 0,
      lower_start: 0,
    }
  }

  /// Forget all points; the next `add` seeds a new segment
  /// 清空可行域
  #[inline]
  pub fn reset(&mut self) {
    self.region = Region::Empty;
    self.upper.clear();
    self.lower.clear();
    self.upper_start = 0;
    self.lower_start = 0;
  }

  /// Offer point `(x, y)`. `x` must be strictly greater than every previous `x`
  /// since the last reset.
  /// 添加点 `(x, y)`，`x` 必须严格递增
  pub fn add(&mut self, x: u64, y: usize) -> Step {
    let xi = i128::from(x);
    let yi = y as i128;
    let p1 = Point {
      x: xi,
      y: yi + self.epsilon,
    };
    let p2 = Point {
      x: xi,
      y: yi - self.epsilon,
    };

    let mut r = match self.region {
      Region::Empty => {
        self.first_x = x;
        self.upper.push(p1);
        self.lower.push(p2);
        self.region = Region::Seeded {
          upper: p1,
          lower: p2,
        };
        return Step::Accept;
      }
      Region::Seeded { upper, lower } => {
        self.upper.push(p1);
        self.lower.push(p2);
        self.region = Region::Bounded([upper, lower, p2, p1]);
        return Step::Accept;
      }
      Region::Bounded(r) => r,
    };

    let slope1 = r[2] - r[0];
    let slope2 = r[3] - r[1];
    if p1 - r[2] < slope1 || p2 - r[3] > slope2 {
      return Step::Close;
    }

    // Upper band point tightens the max slope
    if p1 - r[1] < slope2 {
      let mut min = self.lower[self.lower_start] - p1;
      let mut min_i = self.lower_start;
      for i in self.lower_start + 1..self.lower.len() {
        let val = self.lower[i] - p1;
        if val > min {
          break;
        }
        min = val;
        min_i = i;
      }
      r[1] = self.lower[min_i];
      r[3] = p1;
      self.lower_start = min_i;

      let mut end = self.upper.len();
      while end >= self.upper_start + 2 && cross(self.upper[end - 2], self.upper[end - 1], p1) <= 0
      {
        end -= 1;
      }
      self.upper.truncate(end);
      self.upper.push(p1);
    }

    // Lower band point tightens the min slope
    if p2 - r[0] > slope1 {
      let mut max = self.upper[self.upper_start] - p2;
      let mut max_i = self.upper_start;
      for i in self.upper_start + 1..self.upper.len() {
        let val = self.upper[i] - p2;
        if val < max {
          break;
        }
        max = val;
        max_i = i;
      }
      r[0] = self.upper[max_i];
      r[2] = p2;
      self.upper_start = max_i;

      let mut end = self.lower.len();
      while end >= self.lower_start + 2 && cross(self.lower[end - 2], self.lower[end - 1], p2) >= 0
      {
        end -= 1;
      }
      self.lower.truncate(end);
      self.lower.push(p2);
    }

    self.region = Region::Bounded(r);
    Step::Accept
  }

  /// Canonical line of the current region, anchored at the first key.
  /// `None` when no point was added since the last reset.
  /// 当前可行域的规范直线，锚定在首个键
  #[must_use]
  pub fn segment(&self) -> Option<Segment> {
    match self.region {
      Region::Empty => None,
      Region::Seeded { upper, lower } => Some(Segment::new(
        self.first_x,
        0.0,
        ((upper.y + lower.y) / 2) as f64,
      )),
      Region::Bounded(r) => {
        let origin = i128::from(self.first_x);
        let min_slope = r[2] - r[0];
        let max_slope = r[3] - r[1];
        let min_b = value_at(r[0], min_slope, origin);
        let max_b = value_at(r[1], max_slope, origin);
        let lo = min_slope.as_f64();
        let hi = max_slope.as_f64();

        // Any convex combination of the two extreme lines is feasible.
        // Take the midpoint, or the zero-slope line if the midpoint decreases.
        let w = if lo + hi >= 0.0 { 0.5 } else { hi / (hi - lo) };
        let slope = (w * lo + (1.0 - w) * hi).max(0.0);
        let intercept = w * min_b + (1.0 - w) * max_b;
        Some(Segment::new(self.first_x, slope, intercept))
      }
    }
  }
}

/// Value at `x = origin` of the line through `p` with direction `s`
#[inline]
fn value_at(p: Point, s: Slope, origin: i128) -> f64 {
  // y = p.y + (origin - p.x) * dy / dx, rounded once
  let num = p.y * s.dx + (origin - p.x) * s.dy;
  num as f64 / s.dx as f64
}
