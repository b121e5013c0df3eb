use std::collections::HashMap;

use crate::error::MatrixDefect;
use crate::util::alphabet::SequenceType;

use super::Table;

/// 单层键集合与字母表的比对结果
enum KeyDefect {
    Size(usize),
    Unknown(char),
    Missing(char),
}

/// 依次检查：键数量、是否有字母表外的键、是否缺少字母表中的单体。
/// 多个外来键时报告字典序最小的一个，保证错误信息稳定。
fn check_keys<V>(map: &HashMap<char, V>, st: SequenceType) -> Result<(), KeyDefect> {
    if map.len() != st.size() {
        return Err(KeyDefect::Size(map.len()));
    }

    let mut keys: Vec<char> = map.keys().copied().collect();
    keys.sort_unstable();
    if let Some(&k) = keys.iter().find(|&&k| !st.contains(k)) {
        return Err(KeyDefect::Unknown(k));
    }

    match st.symbols().iter().find(|&&c| !map.contains_key(&c)) {
        Some(&c) => Err(KeyDefect::Missing(c)),
        None => Ok(()),
    }
}

/// 校验整张矩阵：先行键，再按字母表顺序逐行校验列键
pub(crate) fn validate_table(table: &Table, st: SequenceType) -> Result<(), MatrixDefect> {
    let expected = st.size();
    check_keys(table, st).map_err(|d| match d {
        KeyDefect::Size(given) => MatrixDefect::SizeMismatch { given, expected },
        KeyDefect::Unknown(k) => MatrixDefect::UnknownSymbol(k),
        KeyDefect::Missing(k) => MatrixDefect::MissingSymbol(k),
    })?;

    for &row in st.symbols() {
        check_keys(&table[&row], st).map_err(|d| match d {
            KeyDefect::Size(given) => MatrixDefect::RowSizeMismatch { row, given, expected },
            KeyDefect::Unknown(column) => MatrixDefect::UnknownColumn { row, column },
            KeyDefect::Missing(column) => MatrixDefect::MissingColumn { row, column },
        })?;
    }
    Ok(())
}
