// crates/fixnorm-core/src/report.rs

use serde::Serialize;

use crate::normalize::{Outcome, Status};

/// Running totals for one run. Passed by value through the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub test_cases: usize,
    pub files: usize,
    pub normalized: usize,
    pub changed: usize,
    pub pending: usize,
    pub not_found: usize,
    pub read_errors: usize,
    pub write_errors: usize,
    pub bytes_removed: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case(mut self) -> Self {
        self.test_cases += 1;
        self
    }

    pub fn record(mut self, o: &Outcome) -> Self {
        self.files += 1;
        match o.status {
            Status::Normalized => {
                self.normalized += 1;
                if o.written {
                    self.changed += 1;
                    self.bytes_removed += o.bytes_before.saturating_sub(o.bytes_after) as u64;
                } else if o.changed {
                    self.pending += 1;
                }
            }
            Status::NotFound => self.not_found += 1,
            Status::ReadError => self.read_errors += 1,
            Status::WriteError => self.write_errors += 1,
        }
        self
    }

    pub fn failures(&self) -> usize {
        self.read_errors + self.write_errors
    }

    pub fn summary_line(&self) -> String {
        format!(
            "files={} normalized={} changed={} pending={} not_found={} read_errors={} write_errors={} bytes_removed={}",
            self.files,
            self.normalized,
            self.changed,
            self.pending,
            self.not_found,
            self.read_errors,
            self.write_errors,
            self.bytes_removed
        )
    }
}
