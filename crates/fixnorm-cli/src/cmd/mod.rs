// crates/fixnorm-cli/src/cmd/mod.rs

pub mod common;
pub mod file;
pub mod list;
pub mod range;
pub mod run;
pub mod show;
