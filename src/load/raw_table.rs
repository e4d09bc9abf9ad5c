use anyhow::{anyhow, bail, Result};

/// Cell contents read as missing. Any of these becomes the empty cell.
const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A parsed input table, every cell kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names with surrounding whitespace stripped, index column excluded.
    pub headers: Vec<String>,
    /// One entry per data line; each row has exactly `headers.len()` cells.
    /// An empty cell means the value is missing.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column literally named `name`.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("field not found: {:?}", name))
    }

    /// Append `other` below `self`, aligning columns by name.
    ///
    /// Columns only `other` has are added at the end; rows lacking a column
    /// get an empty cell for it.
    pub fn append(&mut self, other: RawTable) {
        if self.headers == other.headers {
            self.rows.extend(other.rows);
            return;
        }

        let added: Vec<String> = other
            .headers
            .iter()
            .filter(|h| !self.headers.contains(*h))
            .cloned()
            .collect();
        if !added.is_empty() {
            for row in &mut self.rows {
                row.resize(row.len() + added.len(), String::new());
            }
            self.headers.extend(added);
        }

        let positions: Vec<Option<usize>> = self
            .headers
            .iter()
            .map(|h| other.headers.iter().position(|o| o == h))
            .collect();
        self.rows.reserve(other.rows.len());
        for mut row in other.rows {
            let aligned = positions
                .iter()
                .map(|p| match p {
                    Some(i) => row.get_mut(*i).map(std::mem::take).unwrap_or_default(),
                    None => String::new(),
                })
                .collect();
            self.rows.push(aligned);
        }
    }

    /// Concatenate `tables` in order. Fails when there is nothing to concatenate.
    pub fn concat(tables: impl IntoIterator<Item = RawTable>) -> Result<RawTable> {
        let mut iter = tables.into_iter();
        let Some(mut merged) = iter.next() else {
            bail!("no objects to concatenate");
        };
        for table in iter {
            merged.append(table);
        }
        Ok(merged)
    }
}

/// Normalize one cell as read from a file.
pub fn clean_cell(raw: &str) -> String {
    if NULL_TOKENS.contains(&raw) {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Borrow cell `idx` of `row`, empty when the row is short.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}
