//! 错误类型：非法字母表 / 非法打分矩阵。

use thiserror::Error;

/// 覆盖矩阵时发现的结构缺陷
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixDefect {
    #[error("Size Given = {given} | Expected = {expected}")]
    SizeMismatch { given: usize, expected: usize },

    #[error("{0} is not a valid monomer")]
    UnknownSymbol(char),

    #[error("{0} is not found in matrix")]
    MissingSymbol(char),

    #[error("row {row}: Size Given = {given} | Expected = {expected}")]
    RowSizeMismatch { row: char, given: usize, expected: usize },

    #[error("row {row}: {column} is not a valid monomer")]
    UnknownColumn { row: char, column: char },

    #[error("row {row}: {column} is not found in matrix")]
    MissingColumn { row: char, column: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// 字母表既不是核苷酸也不是氨基酸
    #[error("InvalidSequenceTypeError: '{0}' is neither nucleotides nor amino acids")]
    InvalidSequenceType(String),

    #[error("InvalidMatrixError: {0}")]
    InvalidMatrix(#[from] MatrixDefect),
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = ScoreError::from(MatrixDefect::SizeMismatch { given: 3, expected: 4 });
        assert_eq!(e.to_string(), "InvalidMatrixError: Size Given = 3 | Expected = 4");

        let e = ScoreError::from(MatrixDefect::UnknownSymbol('U'));
        assert_eq!(e.to_string(), "InvalidMatrixError: U is not a valid monomer");

        let e = ScoreError::from(MatrixDefect::MissingColumn { row: 'A', column: 'T' });
        assert_eq!(e.to_string(), "InvalidMatrixError: row A: T is not found in matrix");
    }

    #[test]
    fn sequence_type_error_is_distinct() {
        let e = ScoreError::InvalidSequenceType("ACGU".to_string());
        assert!(matches!(e, ScoreError::InvalidSequenceType(_)));
        assert!(e.to_string().starts_with("InvalidSequenceTypeError"));
    }
}
