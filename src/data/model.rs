use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a lead table
// ---------------------------------------------------------------------------

/// One cell of a CSV-backed table.
///
/// Lead files carry phone numbers, postcodes and ids whose leading zeros must
/// survive a load/export cycle, so cells keep the raw text rather than a
/// guessed numeric type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellValue {
    Text(String),
    /// Empty field, short record, or a column the row's source file lacks.
    Missing,
}

impl CellValue {
    /// Build a cell from a raw CSV field. Empty fields are missing values.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(field.to_string())
        }
    }

    /// Text used when the cell is written back to CSV.
    pub fn as_field(&self) -> &str {
        match self {
            CellValue::Text(s) => s,
            CellValue::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// LeadRow – one record
// ---------------------------------------------------------------------------

/// A single record: column_name → value.
///
/// Only present values are stored, so two rows with the same content
/// compare equal whether a gap came from an empty field or an absent column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRow {
    cells: BTreeMap<String, CellValue>,
}

impl LeadRow {
    /// Value for `column`, or [`CellValue::Missing`] when the row has none.
    pub fn get(&self, column: &str) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.cells.get(column).unwrap_or(&MISSING)
    }

    /// Present values, in column-name order.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> + '_ {
        self.cells.values()
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match value {
            CellValue::Missing => {
                self.cells.remove(&column);
            }
            value => {
                self.cells.insert(column, value);
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LeadRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = LeadRow::default();
        for (k, v) in iter {
            let v: String = v.into();
            row.set(k, CellValue::from_field(&v));
        }
        row
    }
}

// ---------------------------------------------------------------------------
// LeadTable – ordered columns plus rows
// ---------------------------------------------------------------------------

/// A table with an explicit column order. Used for a loaded category, a
/// search result and anything handed to the exporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadTable {
    /// Ordered column names, including the source tag column when present.
    pub columns: Vec<String>,
    pub rows: Vec<LeadRow>,
}

impl LeadTable {
    pub fn new(columns: Vec<String>) -> Self {
        LeadTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Cells of row `idx` in column order. Panics if `idx` is out of range.
    pub fn row_cells(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        let row = &self.rows[idx];
        self.columns.iter().map(move |c| row.get(c))
    }
}
