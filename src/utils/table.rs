//! Fixed-width table rendering for the day/week/month views.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Separator line under the header
        for col in &self.columns {
            out.push_str(&self.separator.to_string().repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_separator_and_rows() {
        let mut t = Table::new(vec![Column::new("Date", 10), Column::new("Hours", 5)]);
        t.add_row(vec!["2024-01-01".into(), "8:30".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with("----------"));
        assert!(lines[2].contains("2024-01-01"));
        assert!(lines[2].contains("8:30"));
    }
}
