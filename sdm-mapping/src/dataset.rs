//! Input tables for one mapping run

use std::collections::BTreeMap;

use sdm_tabular::ColumnBatch;

use crate::table::Table;

/// One batch per table; tables that were never inserted are empty
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tables: BTreeMap<Table, ColumnBatch>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch for `table`, returning the one it replaces
    pub fn insert(&mut self, table: Table, batch: ColumnBatch) -> Option<ColumnBatch> {
        self.tables.insert(table, batch)
    }

    pub fn with(mut self, table: Table, batch: ColumnBatch) -> Self {
        self.insert(table, batch);
        self
    }

    pub fn get(&self, table: Table) -> Option<&ColumnBatch> {
        self.tables.get(&table)
    }

    pub fn remove(&mut self, table: Table) -> Option<ColumnBatch> {
        self.tables.remove(&table)
    }

    /// Tables present, in plan order
    pub fn tables(&self) -> impl Iterator<Item = (Table, &ColumnBatch)> {
        self.tables.iter().map(|(t, b)| (*t, b))
    }

    /// Row count of `table` (0 when absent)
    pub fn rows(&self, table: Table) -> usize {
        self.get(table).map_or(0, |b| b.num_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_tabular::Column;

    #[test]
    fn test_missing_table_is_empty() {
        let ds = Dataset::new();
        assert!(ds.get(Table::Paper).is_none());
        assert_eq!(ds.rows(Table::Paper), 0);
    }

    #[test]
    fn test_tables_in_plan_order() {
        let batch = |name: &str| {
            ColumnBatch::from_columns(vec![(name, Column::Int64(vec![Some(1)]))]).unwrap()
        };
        let ds = Dataset::new()
            .with(Table::HasTopic, batch("id"))
            .with(Table::Area, batch("area"))
            .with(Table::Paper, batch("paper"));
        let order: Vec<Table> = ds.tables().map(|(t, _)| t).collect();
        assert_eq!(order, vec![Table::Area, Table::Paper, Table::HasTopic]);
        assert_eq!(ds.rows(Table::Area), 1);
    }
}
