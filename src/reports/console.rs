use super::{ReportTable, common};
use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

const GAP: &str = "  ";

pub fn generate<W: Write>(table: &ReportTable, use_colors: bool, writer: &mut W) -> Result<()> {
    if table.rows.is_empty() {
        writeln!(writer, "No metrics to report")?;
        return Ok(());
    }

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.values.iter().map(|&v| common::format_value(v)).collect())
        .collect();

    let key_width = column_width("Id", table.rows.iter().map(|row| display_width(&row.key)));
    let label_width = column_width("Label", table.rows.iter().map(|row| display_width(&row.label)));
    let unit_width = column_width("Unit", table.rows.iter().map(|row| display_width(row.unit.label())));
    let value_widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| column_width(column, cells.iter().map(|row| row.get(i).map_or(0, |cell| display_width(cell)))))
        .collect();

    let mut header = format!("{:<key_width$}{GAP}{:<label_width$}{GAP}{:<unit_width$}", "Id", "Label", "Unit");
    for (column, &width) in table.columns.iter().zip(&value_widths) {
        header.push_str(GAP);
        header.push_str(&format!("{:>width$}", column.as_str()));
    }
    let header = header.trim_end();

    if use_colors {
        writeln!(writer, "{}", header.bold().green())?;
    } else {
        writeln!(writer, "{header}")?;
    }
    writeln!(writer, "{}", "─".repeat(display_width(header)))?;

    for (row, row_cells) in table.rows.iter().zip(&cells) {
        let key = format!("{:<key_width$}", row.key.as_str());
        let mut line = if use_colors {
            format!("{}", key.cyan())
        } else {
            key
        };
        line.push_str(&format!("{GAP}{:<label_width$}{GAP}{:<unit_width$}", row.label.as_str(), row.unit.label()));

        for (cell, &width) in row_cells.iter().zip(&value_widths) {
            line.push_str(GAP);
            line.push_str(&format!("{cell:>width$}"));
        }

        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

// Padding in `format!` counts chars, so widths must too.
fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.fold(display_width(header), usize::max)
}
