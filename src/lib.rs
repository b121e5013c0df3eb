//! # subst-score
//!
//! 序列比对使用的替换打分矩阵。
//!
//! 本 crate 提供：
//!
//! - **默认矩阵**：按核苷酸 / 氨基酸字母表生成 match / mismatch 矩阵
//! - **矩阵覆盖**：替换为自定义矩阵或预置矩阵（如 BLOSUM62），替换前完整校验
//! - **gap 罚分归一化**：existence / extension 无论传入正负，一律保存为非正数
//! - **表格输出**：定宽文本表格，便于人工检查
//!
//! ## 快速示例
//!
//! ```rust
//! use subst_score::score::{presets, Score};
//! use subst_score::util::alphabet::SequenceType;
//!
//! // 默认 match/mismatch 矩阵
//! let score = Score::new(1, -1, 11, 1, SequenceType::Nucleotide);
//! assert_eq!(score.existence(), -11);
//! assert_eq!(score.get('A', 'G'), Some(-1));
//!
//! // 换成 BLOSUM62
//! let mut protein = Score::new(1, -1, 11, 1, SequenceType::AminoAcid);
//! protein.set_table(presets::blosum62_table()).unwrap();
//! assert_eq!(protein.get('W', 'W'), Some(11));
//! println!("{}", protein);
//! ```
//!
//! ## 模块说明
//!
//! - [`score`] — 打分矩阵、预置矩阵、校验与表格输出
//! - [`util`] — 字母表定义
//! - [`error`] — 错误类型

pub mod error;
pub mod score;
pub mod util;

pub use error::{MatrixDefect, Result, ScoreError};
pub use score::{Preset, Score, ScoreOpt, Table};
pub use util::alphabet::SequenceType;
