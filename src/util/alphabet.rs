use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ScoreError};

/// 核苷酸单体；顺序即矩阵的行列顺序
pub const NUCLEOTIDES: [char; 4] = ['A', 'G', 'C', 'T'];

/// 20 种标准氨基酸 + B (Asx), Z (Glx), X (未知), * (终止)
pub const AMINO_ACIDS: [char; 24] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W', 'Y',
    'V', 'B', 'Z', 'X', '*',
];

/// 仅有的两种合法字母表
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceType {
    Nucleotide,
    AminoAcid,
}

impl SequenceType {
    #[inline]
    pub fn symbols(self) -> &'static [char] {
        match self {
            SequenceType::Nucleotide => &NUCLEOTIDES,
            SequenceType::AminoAcid => &AMINO_ACIDS,
        }
    }

    #[inline]
    pub fn size(self) -> usize {
        self.symbols().len()
    }

    #[inline]
    pub fn contains(self, monomer: char) -> bool {
        self.symbols().contains(&monomer)
    }

    pub fn index_of(self, monomer: char) -> Option<usize> {
        self.symbols().iter().position(|&c| c == monomer)
    }

    /// 将调用方给出的符号序列解析为已知字母表。
    /// 必须与 NUCLEOTIDES / AMINO_ACIDS 完全一致（成员与顺序），否则报错。
    pub fn from_symbols(symbols: &[char]) -> Result<Self> {
        if symbols == NUCLEOTIDES.as_slice() {
            Ok(SequenceType::Nucleotide)
        } else if symbols == AMINO_ACIDS.as_slice() {
            Ok(SequenceType::AminoAcid)
        } else {
            Err(ScoreError::InvalidSequenceType(symbols.iter().collect()))
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SequenceType::Nucleotide => "nucleotide",
            SequenceType::AminoAcid => "amino-acid",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceType {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nucleotide" | "nucleotides" | "dna" | "nt" => Ok(SequenceType::Nucleotide),
            "amino-acid" | "amino-acids" | "amino_acid" | "protein" | "aa" => Ok(SequenceType::AminoAcid),
            _ => Err(ScoreError::InvalidSequenceType(s.to_string())),
        }
    }
}

/// 原始序列字节 -> 单体字符（大写）
#[inline]
pub fn to_monomer(b: u8) -> char {
    b.to_ascii_uppercase() as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_unique_symbols() {
        for st in [SequenceType::Nucleotide, SequenceType::AminoAcid] {
            let syms = st.symbols();
            for (i, a) in syms.iter().enumerate() {
                assert!(!syms[i + 1..].contains(a), "{} repeated in {}", a, st);
            }
        }
        assert_eq!(SequenceType::Nucleotide.size(), 4);
        assert_eq!(SequenceType::AminoAcid.size(), 24);
    }

    #[test]
    fn from_symbols_accepts_only_canonical_sets() {
        assert_eq!(SequenceType::from_symbols(&NUCLEOTIDES).unwrap(), SequenceType::Nucleotide);
        assert_eq!(SequenceType::from_symbols(&AMINO_ACIDS).unwrap(), SequenceType::AminoAcid);

        // RNA, reordered and partial alphabets are all rejected
        let rna = ['A', 'G', 'C', 'U'];
        let reordered = ['A', 'C', 'G', 'T'];
        let partial = ['A', 'G', 'C'];
        let empty: [char; 0] = [];
        for bad in [&rna[..], &reordered[..], &partial[..], &empty[..]] {
            assert!(matches!(
                SequenceType::from_symbols(bad),
                Err(ScoreError::InvalidSequenceType(_))
            ));
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("DNA".parse::<SequenceType>().unwrap(), SequenceType::Nucleotide);
        assert_eq!("protein".parse::<SequenceType>().unwrap(), SequenceType::AminoAcid);
        assert_eq!("amino-acid".parse::<SequenceType>().unwrap(), SequenceType::AminoAcid);
        let err = "rna".parse::<SequenceType>().unwrap_err();
        assert_eq!(err, ScoreError::InvalidSequenceType("rna".to_string()));
    }

    #[test]
    fn index_and_monomer() {
        assert_eq!(SequenceType::Nucleotide.index_of('C'), Some(2));
        assert_eq!(SequenceType::AminoAcid.index_of('*'), Some(23));
        assert_eq!(SequenceType::Nucleotide.index_of('N'), None);
        assert_eq!(to_monomer(b'w'), 'W');
        assert!(SequenceType::AminoAcid.contains(to_monomer(b'*')));
    }
}
