//! Column-aligned text table.

/// Separator between cells.
pub const SEPARATOR: &str = " | ";

/// Width of each column: the longest value (in characters) among the header and rows.
pub fn column_widths<R: AsRef<[String]>>(header: &[String], rows: &[R]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row.as_ref()) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths
}

/// One line: each value left-justified to its column width, joined by `" | "`.
pub fn format_line(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Header line followed by one line per row, newline-separated (no trailing newline).
pub fn render_table<R: AsRef<[String]>>(header: &[String], rows: &[R]) -> String {
    let widths = column_widths(header, rows);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(header, &widths));
    for row in rows {
        lines.push(format_line(row.as_ref(), &widths));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn widths_cover_header_and_rows() {
        let header = strings(&["Name", "Time"]);
        let rows = vec![strings(&["Alexandria", "1:05"]), strings(&["Bo", "10:00"])];
        assert_eq!(column_widths(&header, &rows), vec![10, 5]);
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let header = strings(&["N", "T"]);
        let rows = vec![strings(&["Zoë", "0:01"])];
        assert_eq!(column_widths(&header, &rows), vec![3, 4]);
    }

    #[test]
    fn renders_left_justified() {
        let header = strings(&["Name", "Time"]);
        let rows = vec![strings(&["Alice", "00:45"]), strings(&["bob", " 00:59"])];
        let out = render_table(&header, &rows);
        assert_eq!(
            out,
            "Name  | Time  \nAlice | 00:45 \nbob   |  00:59"
        );
    }
}
