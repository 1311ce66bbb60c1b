// crates/fixnorm-cli/src/io/report.rs

use anyhow::Context;
use fixnorm_core::{Outcome, Status, Tally};
use serde::Serialize;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<&'a str>,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    summary: &'a Tally,
}

/// Line-oriented outcome log on stdout: text or JSONL.
pub struct OutcomePrinter {
    json: bool,
}

impl OutcomePrinter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn outcome(&mut self, case: Option<&str>, o: &Outcome) {
        if self.json {
            match serde_json::to_string(&OutcomeRecord { case, outcome: o }) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "outcome not serializable"),
            }
        } else {
            println!("{}", text_line(o));
        }
    }

    pub fn finish_corpus(&mut self, tally: &Tally) -> anyhow::Result<()> {
        if self.json {
            return self.summary(tally);
        }
        println!();
        println!("Processed {} test directories", tally.test_cases);
        println!("{}", tally.summary_line());
        Ok(())
    }

    pub fn finish_files(&mut self, tally: &Tally) -> anyhow::Result<()> {
        if self.json {
            return self.summary(tally);
        }
        println!();
        println!("Processed {} files", tally.files);
        println!("{}", tally.summary_line());
        Ok(())
    }

    fn summary(&self, tally: &Tally) -> anyhow::Result<()> {
        let line = serde_json::to_string(&SummaryRecord { summary: tally }).context("encode summary")?;
        println!("{line}");
        Ok(())
    }
}

pub fn text_line(o: &Outcome) -> String {
    let p = o.path.display();
    let detail = o.detail.as_deref().unwrap_or("");
    match o.status {
        Status::Normalized if o.written => format!("Fixed: {p}"),
        Status::Normalized if o.changed => format!("Would fix: {p}"),
        Status::Normalized => format!("Clean: {p}"),
        Status::NotFound => format!("Not found: {p}"),
        Status::ReadError => format!("Read error: {p}: {detail}"),
        Status::WriteError => format!("Write error: {p}: {detail}"),
    }
}
