use super::{ReportTable, common};
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    write!(writer, "Id,Label,Unit")?;
    for column in &table.columns {
        write!(writer, ",{}", escape_csv(column))?;
    }
    writeln!(writer)?;

    for row in &table.rows {
        write!(writer, "{},{},{}", escape_csv(&row.key), escape_csv(&row.label), escape_csv(row.unit.label()))?;
        for &value in &row.values {
            write!(writer, ",{}", common::format_value(value))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Unit;
    use crate::reports::ReportRow;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_report() {
        let table = ReportTable {
            columns: vec!["Min".into(), "Max".into()],
            rows: vec![ReportRow {
                key: "strc".into(),
                label: "Stab (Light) - Recovery".into(),
                unit: Unit::InverseSpeed,
                values: vec![500.0, 612.5],
            }],
        };

        let mut output = String::new();
        generate(&table, &mut output).unwrap();
        assert_eq!(output, "Id,Label,Unit,Min,Max\nstrc,Stab (Light) - Recovery,-Milliseconds,500,612.50\n");
    }

    #[test]
    fn test_csv_empty() {
        let mut output = String::new();
        generate(&ReportTable::default(), &mut output).unwrap();
        assert_eq!(output, "Id,Label,Unit\n");
    }
}
