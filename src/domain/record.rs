use indexmap::IndexMap;

use super::FieldLabel;

/// Extracted fields of one snapshot, kept in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<FieldLabel, String>,
}

/// Accepted records in ascending identifier order.
pub type ResultSet = Vec<Record>;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: FieldLabel, value: impl Into<String>) {
        self.fields.insert(label, value.into());
    }

    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        self.fields.get(&label).map(String::as_str)
    }

    pub fn remove(&mut self, label: FieldLabel) -> Option<String> {
        self.fields.shift_remove(&label)
    }

    pub fn contains(&self, label: FieldLabel) -> bool {
        self.fields.contains_key(&label)
    }

    pub fn labels(&self) -> impl Iterator<Item = FieldLabel> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldLabel, &str)> {
        self.fields.iter().map(|(label, value)| (*label, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<V: Into<String>> FromIterator<(FieldLabel, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (FieldLabel, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (label, value) in iter {
            record.insert(label, value);
        }
        record
    }
}

/// Rectangular view over a result set: the first-seen union of labels as
/// columns, one row per record, empty strings for missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<FieldLabel>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn from_records(records: &[Record]) -> Self {
        let mut columns: Vec<FieldLabel> = vec![];
        for label in records.iter().flat_map(Record::labels) {
            if !columns.contains(&label) {
                columns.push(label);
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|label| record.get(*label).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        ResultTable { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
