//! Plain-text preview of a validated table.

use crate::validation::ValidatedTable;

/// Rows shown by default in a preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Render the first `max_rows` rows as left-aligned, space-separated columns.
pub fn render_preview(table: &ValidatedTable, max_rows: usize) -> String {
    let headers = table.output_headers();
    let rows: Vec<Vec<String>> = table.output_rows().take(max_rows).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::sample_dataset;
    use crate::validation::validate_table;

    #[test]
    fn test_preview_aligns_columns() {
        let table = validate_table(&sample_dataset()).unwrap();
        let preview = render_preview(&table, DEFAULT_PREVIEW_ROWS);
        let lines: Vec<&str> = preview.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("identity_number  full_name"));
        let column = lines[0].find("is_valid").unwrap();
        assert_eq!(&lines[1][column..column + 4], "true");
        assert_eq!(&lines[2][column..column + 5], "false");
    }

    #[test]
    fn test_preview_limits_rows() {
        let table = validate_table(&sample_dataset()).unwrap();
        assert_eq!(render_preview(&table, 2).lines().count(), 3);
    }
}
