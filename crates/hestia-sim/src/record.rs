//! In-memory run output.

use hestia_core::{LoadType, Unit};

/// Metadata of one recorded output column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputColumn {
    pub component: String,
    pub port: String,
    pub load_type: LoadType,
    pub unit: Unit,
}

/// Full recording of one run: one row of output values per timestep,
/// columns in output registration order.
#[derive(Debug, Clone)]
pub struct SimRecord {
    pub columns: Vec<OutputColumn>,
    pub rows: Vec<Vec<f64>>,
    /// Timesteps accepted through the force-convergence fallback rather
    /// than a converged fixed point.
    pub forced_timesteps: usize,
}

impl SimRecord {
    pub fn column_index(&self, component: &str, port: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.component == component && c.port == port)
    }

    /// One recorded value.
    pub fn value(&self, timestep: usize, component: &str, port: &str) -> Option<f64> {
        let column = self.column_index(component, port)?;
        self.rows.get(timestep)?.get(column).copied()
    }

    /// The whole series of one column.
    pub fn series(&self, component: &str, port: &str) -> Option<Vec<f64>> {
        let column = self.column_index(component, port)?;
        Some(self.rows.iter().map(|row| row[column]).collect())
    }

    pub fn timestep_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SimRecord {
        SimRecord {
            columns: vec![
                OutputColumn {
                    component: "A".to_string(),
                    port: "X".to_string(),
                    load_type: LoadType::Heating,
                    unit: Unit::Watt,
                },
                OutputColumn {
                    component: "B".to_string(),
                    port: "Y".to_string(),
                    load_type: LoadType::Temperature,
                    unit: Unit::Celsius,
                },
            ],
            rows: vec![vec![1.0, 20.0], vec![2.0, 21.0]],
            forced_timesteps: 0,
        }
    }

    #[test]
    fn value_lookup_by_names() {
        let record = record();
        assert_eq!(record.value(1, "B", "Y"), Some(21.0));
        assert_eq!(record.value(2, "B", "Y"), None);
        assert_eq!(record.value(0, "B", "Z"), None);
    }

    #[test]
    fn series_extracts_one_column() {
        let record = record();
        assert_eq!(record.series("A", "X"), Some(vec![1.0, 2.0]));
    }
}
