use std::fmt;

use super::Score;

/// 定宽单元格：右对齐到 2 列后左对齐到 3 列
fn cell(v: impl fmt::Display) -> String {
    format!("{:<3}", format!("{:>2}", v))
}

/// 输出格式（以核苷酸为例）：
///
/// ```text
/// =====================
/// | GapExistence: -11 |
/// | GapExtension:  -1 |
/// =====================
/// |   | A | G | C | T |
/// |---|---|---|---|---|
/// | A | 1 |-1 |-1 |-1 |
/// |---|---|---|---|---|
/// | G |-1 | 1 |-1 |-1 |
/// |---|---|---|---|---|
/// | C |-1 |-1 | 1 |-1 |
/// |---|---|---|---|---|
/// | T |-1 |-1 |-1 | 1 |
/// =====================
/// ```
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = self.sequence_type.symbols();
        let across = symbols.len() + 1;
        let rule = "=".repeat(4 * across + 1);
        let divider = format!("{}|", "|---".repeat(across));

        writeln!(f, "{}", rule)?;
        writeln!(f, "| GapExistence: {:<4}|", format!("{:>3}", self.existence))?;
        writeln!(f, "| GapExtension: {:<4}|", format!("{:>3}", self.extension))?;
        writeln!(f, "{}", rule)?;

        write!(f, "|   |")?;
        for &c in symbols {
            write!(f, "{}|", cell(c))?;
        }
        // table is square over the alphabet (checked on every override)
        for &r in symbols {
            write!(f, "\n{}\n|{}|", divider, cell(r))?;
            let row = &self.table[&r];
            for c in symbols {
                write!(f, "{}|", cell(row[c]))?;
            }
        }
        write!(f, "\n{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use crate::score::Score;
    use crate::util::alphabet::SequenceType;

    #[test]
    fn render_nucleotide_example() {
        let score = Score::new(1, -1, 11, 1, SequenceType::Nucleotide);
        let expected = "\
=====================
| GapExistence: -11 |
| GapExtension:  -1 |
=====================
|   | A | G | C | T |
|---|---|---|---|---|
| A | 1 |-1 |-1 |-1 |
|---|---|---|---|---|
| G |-1 | 1 |-1 |-1 |
|---|---|---|---|---|
| C |-1 |-1 | 1 |-1 |
|---|---|---|---|---|
| T |-1 |-1 |-1 | 1 |
=====================";
        assert_eq!(score.render(), expected);
    }

    #[test]
    fn render_blosum62_layout() {
        let out = Score::blosum62().to_string();
        let lines: Vec<&str> = out.lines().collect();
        // 4 header lines + column header + 24 * (divider + row) + closing rule
        assert_eq!(lines.len(), 4 + 1 + 24 * 2 + 1);
        assert_eq!(lines[0].len(), 4 * 25 + 1);
        assert!(lines[4].starts_with("|   | A | R | N | D |"));
        assert!(lines[4].ends_with(" X | * |"));
        let w_row = lines.iter().find(|l| l.starts_with("| W |")).unwrap();
        assert!(w_row.contains("|11 |"));
        let stop_row = lines.iter().find(|l| l.starts_with("| * |")).unwrap();
        assert!(stop_row.ends_with("-4 | 1 |"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn render_wide_values_keep_separators() {
        let out = Score::new(100, -100, 1000, 0, SequenceType::Nucleotide).to_string();
        assert!(out.contains("| GapExistence: -1000|"));
        assert!(out.contains("| GapExtension:   0 |"));
        assert!(out.contains("| A |100|-100|"));
    }
}
