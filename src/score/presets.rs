//! 预置替换矩阵（纯数据）。
//!
//! 行列顺序与 [`NUCLEOTIDES`] / [`AMINO_ACIDS`] 一致。

use std::collections::HashMap;

use super::Table;
use crate::util::alphabet::{SequenceType, AMINO_ACIDS, NUCLEOTIDES};

/// 核苷酸单位矩阵，顺序 A G C T
#[rustfmt::skip]
pub const EXAMPLE_MATRIX: [[i32; 4]; 4] = [
    //  A  G  C  T
    [1, 0, 0, 0], // A
    [0, 1, 0, 0], // G
    [0, 0, 1, 0], // C
    [0, 0, 0, 1], // T
];

/// BLOSUM62，NCBI 标准值
#[rustfmt::skip]
pub const BLOSUM62: [[i32; 24]; 24] = [
    //   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4], // A
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4], // R
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4], // N
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4], // D
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4], // C
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4], // Q
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4], // E
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4], // G
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4], // H
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4], // I
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4], // L
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4], // K
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4], // M
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4], // F
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4], // P
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4], // S
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4], // T
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4], // W
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4], // Y
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4], // V
    [-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4], // B
    [-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4], // Z
    [ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4], // X
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1], // *
];

/// BLOSUM62 的标准 gap 罚分（existence, extension）
pub const BLOSUM62_GAPS: (i32, i32) = (11, 1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Identity,
    Blosum62,
}

impl Preset {
    pub fn sequence_type(self) -> SequenceType {
        match self {
            Preset::Identity => SequenceType::Nucleotide,
            Preset::Blosum62 => SequenceType::AminoAcid,
        }
    }

    pub fn table(self) -> Table {
        match self {
            Preset::Identity => expand(&NUCLEOTIDES, &EXAMPLE_MATRIX),
            Preset::Blosum62 => expand(&AMINO_ACIDS, &BLOSUM62),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "example" => Ok(Preset::Identity),
            "blosum62" => Ok(Preset::Blosum62),
            other => Err(format!("unknown preset '{}' (expected identity or blosum62)", other)),
        }
    }
}

/// 二维常量 -> 两级映射
fn expand<const N: usize>(symbols: &[char; N], rows: &[[i32; N]; N]) -> Table {
    let mut table: Table = HashMap::with_capacity(N);
    for (i, &r) in symbols.iter().enumerate() {
        let row = symbols.iter().zip(rows[i].iter()).map(|(&c, &v)| (c, v)).collect();
        table.insert(r, row);
    }
    table
}

pub fn example_table() -> Table {
    Preset::Identity.table()
}

pub fn blosum62_table() -> Table {
    Preset::Blosum62.table()
}
