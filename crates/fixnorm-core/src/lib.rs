pub mod error;
pub mod validate;

pub mod corpus;
pub mod fixture;
pub mod normalize;
pub mod pipeline;
pub mod repr;
pub mod report;

pub use crate::corpus::{CorpusSpec, LocateMode, Resolve, ResolveMode, TestCase};
pub use crate::fixture::{ExtensionClass, FixtureFile};
pub use crate::normalize::{NormalizeOptions, Outcome, Status};
pub use crate::report::Tally;
