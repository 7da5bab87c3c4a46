use super::ReportTable;
use crate::Result;
use core::fmt::Write;
use serde_json::json;

/// Render `table` as a JSON document.
///
/// Each row's `values` is an array aligned with `columns`; column names need not be unique.
#[expect(unused_results, reason = "row keys are distinct so Map::insert never replaces a value")]
pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    let mut rows = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let mut row_obj = serde_json::Map::new();
        row_obj.insert("id".to_string(), json!(row.key.as_str()));
        row_obj.insert("label".to_string(), json!(row.label.as_str()));
        row_obj.insert("unit".to_string(), json!(row.unit));

        if !table.columns.is_empty() {
            row_obj.insert("values".to_string(), json!(row.values));
        }

        rows.push(json!(row_obj));
    }

    let output = json!({
        "columns": table.columns.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "rows": rows,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
