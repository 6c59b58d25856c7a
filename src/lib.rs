pub mod api;
pub mod domain;
pub mod infra;
mod run;
#[cfg(test)]
mod tests;
pub mod util;

pub use run::{Args, run, start};
