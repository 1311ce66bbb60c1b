// crates/fixnorm-core/src/pipeline.rs
//
// Resolver -> Locator -> Normalizer, strictly sequential.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use crate::corpus::{CorpusSpec, TestCase};
use crate::normalize::{normalize_file, NormalizeOptions, Outcome};
use crate::report::Tally;

/// Normalize every fixture of every test case in `spec`.
///
/// `sink` sees each outcome as it is produced; the updated tally is returned.
pub fn run_corpus<F>(spec: &CorpusSpec, opts: &NormalizeOptions, mut tally: Tally, mut sink: F) -> Tally
where
    F: FnMut(&TestCase, &Outcome),
{
    let cases = spec.test_cases();
    info!(
        strategy = spec.resolve.label(),
        root = %spec.root.display(),
        cases = cases.len(),
        "corpus resolved"
    );

    for case in &cases {
        let _span = info_span!("case", id = %case.id).entered();
        let fixtures = spec.fixtures(case);
        debug!(fixtures = fixtures.len(), "fixtures located");

        for fixture in &fixtures {
            let (outcome, _written) = normalize_file(&fixture.path, opts);
            sink(case, &outcome);
            tally = tally.record(&outcome);
        }
        tally = tally.case();
    }

    info!(
        cases = tally.test_cases,
        files = tally.files,
        failures = tally.failures(),
        "corpus run complete"
    );
    tally
}

/// Normalize an explicit list of files outside any corpus.
pub fn run_files<F>(paths: &[PathBuf], opts: &NormalizeOptions, mut tally: Tally, mut sink: F) -> Tally
where
    F: FnMut(&Outcome),
{
    for path in paths {
        let (outcome, _written) = normalize_file(path, opts);
        sink(&outcome);
        tally = tally.record(&outcome);
    }
    tally
}
