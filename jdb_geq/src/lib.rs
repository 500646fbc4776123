//! # jdb_geq: nextGEQ over a learned piecewise linear index
//! jdb_geq：基于学习型分段线性索引的 nextGEQ 查询
//!
//! Answers "smallest key `>=` a given key" over a sorted, immutable `u64` array.
//! The array is partitioned into the minimum number of linear segments whose
//! rank prediction is never off by more than `epsilon`; a query predicts a
//! position and binary searches a window of `2 * epsilon + 2` keys around it.
//! 将有序数组划分为最少的线性段（预测误差不超过 `epsilon`），查询时预测位置并在小窗口内二分。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use jdb_geq::{DEFAULT_EPSILON, Index};
//!
//! let data: Vec<u64> = (0..1000).map(|i| i * 3).collect();
//! let index = Index::new(&data, DEFAULT_EPSILON, true).unwrap();
//! assert_eq!(index.next_geq(301), Some(303));
//! assert_eq!(index.next_geq(2997), Some(2997));
//! assert_eq!(index.next_geq(2998), None);
//! assert!(index.size_in_bytes() < data.len() * size_of::<u64>());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod build;
mod clamp;
mod cone;
mod consts;
pub mod error;
mod index;
mod segment;

pub use build::build_segments;
pub use clamp::{add_eps, sub_eps};
pub use consts::{DEFAULT_EPSILON, MAX_EPSILON, WINDOW_SLACK};
pub use error::{Error, Result};
pub use index::{Index, Stats};
pub use segment::Segment;
