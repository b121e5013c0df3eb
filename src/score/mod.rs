//! 替换打分矩阵：默认 match/mismatch 矩阵、带校验的矩阵覆盖、gap 罚分符号归一化。

pub mod presets;
mod render;
mod validate;

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::util::alphabet::{to_monomer, SequenceType};

pub use presets::Preset;

/// 两级映射：行单体 -> 列单体 -> 得分
pub type Table = HashMap<char, HashMap<char, i32>>;

/// 构建 [`Score`] 的参数集合
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreOpt {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub existence: i32,
    pub extension: i32,
    pub sequence_type: SequenceType,
}

impl Default for ScoreOpt {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            existence: 11,
            extension: 1,
            sequence_type: SequenceType::Nucleotide,
        }
    }
}

impl ScoreOpt {
    pub fn build(&self) -> Score {
        Score::new(
            self.match_score,
            self.mismatch_score,
            self.existence,
            self.extension,
            self.sequence_type,
        )
    }
}

/// 替换打分矩阵。
///
/// `existence` / `extension` 始终以非正数保存；`table` 的行与列都与字母表一一对应。
/// 构造后只能通过 [`Score::set_table`] / [`Score::with_table`] 整体替换矩阵，
/// 且替换前先校验，失败时保留原矩阵。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    #[serde(rename = "match")]
    match_score: i32,
    #[serde(rename = "mismatch")]
    mismatch_score: i32,
    existence: i32,
    extension: i32,
    sequence_type: SequenceType,
    #[serde(serialize_with = "ordered_table")]
    table: Table,
}

impl Score {
    /// 按字母表生成默认矩阵：对角线为 `match_score`，其余为 `mismatch_score`。
    /// gap 罚分无论传入正负，一律保存为 `-|x|`。
    pub fn new(
        match_score: i32,
        mismatch_score: i32,
        existence: i32,
        extension: i32,
        sequence_type: SequenceType,
    ) -> Self {
        let symbols = sequence_type.symbols();
        let mut table: Table = HashMap::with_capacity(symbols.len());
        for &r in symbols {
            let row = symbols
                .iter()
                .map(|&c| (c, if r == c { match_score } else { mismatch_score }))
                .collect();
            table.insert(r, row);
        }

        let score = Self {
            match_score,
            mismatch_score,
            existence: penalty(existence),
            extension: penalty(extension),
            sequence_type,
            table,
        };
        debug!(
            sequence_type = %sequence_type,
            match_score,
            mismatch_score,
            existence = score.existence,
            extension = score.extension,
            "built default scoring matrix"
        );
        score
    }

    /// 与 [`Score::new`] 相同，但字母表以符号序列给出；
    /// 只接受 `NUCLEOTIDES` 或 `AMINO_ACIDS` 本身。
    pub fn from_alphabet(
        match_score: i32,
        mismatch_score: i32,
        existence: i32,
        extension: i32,
        alphabet: &[char],
    ) -> Result<Self> {
        let sequence_type = SequenceType::from_symbols(alphabet)?;
        Ok(Self::new(match_score, mismatch_score, existence, extension, sequence_type))
    }

    /// 使用预置矩阵。match / mismatch 取矩阵中的最高分与最低分。
    pub fn from_preset(preset: Preset, existence: i32, extension: i32) -> Self {
        let table = preset.table();
        let values = || table.values().flat_map(HashMap::values).copied();
        let match_score = values().max().unwrap_or(0);
        let mismatch_score = values().min().unwrap_or(0);
        Self {
            match_score,
            mismatch_score,
            existence: penalty(existence),
            extension: penalty(extension),
            sequence_type: preset.sequence_type(),
            table,
        }
    }

    /// BLOSUM62，gap 罚分 -11 / -1
    pub fn blosum62() -> Self {
        let (existence, extension) = presets::BLOSUM62_GAPS;
        Self::from_preset(Preset::Blosum62, existence, extension)
    }

    /// 用调用方给出的矩阵替换当前矩阵。先校验再替换，失败时原矩阵不变。
    pub fn set_table(&mut self, table: Table) -> Result<()> {
        if let Err(defect) = validate::validate_table(&table, self.sequence_type) {
            debug!(sequence_type = %self.sequence_type, %defect, "rejected scoring table");
            return Err(defect.into());
        }
        self.table = table;
        debug!(sequence_type = %self.sequence_type, "replaced scoring table");
        Ok(())
    }

    /// [`Score::set_table`] 的按值版本，返回新实例
    pub fn with_table(mut self, table: Table) -> Result<Self> {
        self.set_table(table)?;
        Ok(self)
    }

    #[inline]
    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    #[inline]
    pub fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    /// gap 开启罚分（<= 0）
    #[inline]
    pub fn existence(&self) -> i32 {
        self.existence
    }

    /// gap 延伸罚分（<= 0）
    #[inline]
    pub fn extension(&self) -> i32 {
        self.extension
    }

    #[inline]
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    #[inline]
    pub fn get(&self, row: char, col: char) -> Option<i32> {
        self.table.get(&row)?.get(&col).copied()
    }

    /// 原始序列字节查分（大小写不敏感）
    #[inline]
    pub fn score_pair(&self, a: u8, b: u8) -> Option<i32> {
        self.get(to_monomer(a), to_monomer(b))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[inline]
fn penalty(v: i32) -> i32 {
    -v.saturating_abs()
}

fn ordered_table<S: Serializer>(table: &Table, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let ordered: BTreeMap<char, BTreeMap<char, i32>> = table
        .iter()
        .map(|(&r, row)| (r, row.iter().map(|(&c, &v)| (c, v)).collect()))
        .collect();
    ordered.serialize(serializer)
}
