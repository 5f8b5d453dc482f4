//! CSV export.
//!
//! Creates two files in the output directory:
//! - `efficiency.csv`:  `tick,efficiency,saved,dead,alive`
//! - `patient_ttl.csv`: `agent_id,tick,injury_level,ttl,alive`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EfficiencyRow, OutputResult, PatientTtlRow};

pub struct CsvWriter {
    efficiency: Writer<File>,
    patients:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut efficiency = Writer::from_path(dir.join("efficiency.csv"))?;
        efficiency.write_record(["tick", "efficiency", "saved", "dead", "alive"])?;

        let mut patients = Writer::from_path(dir.join("patient_ttl.csv"))?;
        patients.write_record(["agent_id", "tick", "injury_level", "ttl", "alive"])?;

        Ok(Self { efficiency, patients, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_efficiency(&mut self, row: &EfficiencyRow) -> OutputResult<()> {
        self.efficiency.write_record(&[
            row.tick.to_string(),
            format!("{:.6}", row.efficiency),
            row.saved.to_string(),
            row.dead.to_string(),
            row.alive.to_string(),
        ])?;
        Ok(())
    }

    fn write_patients(&mut self, rows: &[PatientTtlRow]) -> OutputResult<()> {
        for row in rows {
            self.patients.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.injury_level.to_string(),
                row.ttl.to_string(),
                (row.alive as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.efficiency.flush()?;
        self.patients.flush()?;
        Ok(())
    }
}
