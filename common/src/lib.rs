//! Shared scaffolding for the per-year solver binaries: the `Day` contract,
//! command line, logging, configuration and the puzzle server client.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod grid;
pub mod log;
pub mod ocr;
pub mod runner;
pub mod template;

pub use cli::Cli;
pub use error::AocError;
pub use runner::{dispatch, run, Runner};
pub use template::{Answer, Answers, Day, Parts};

/// Runs a solver on its example and checks the published answers.
#[macro_export]
macro_rules! assert_example {
    ($day:ty) => {{
        use $crate::Day as _;
        let day = <$day>::for_example();
        let answers = day.solve(<$day>::EXAMPLE, $crate::Parts::BOTH).unwrap();
        let [first, second] = <$day>::EXAMPLE_ANSWERS;
        if let Some(first) = first {assert_eq!(answers.0.as_ref().unwrap().as_str(), first)}
        if let Some(second) = second {assert_eq!(answers.1.as_ref().unwrap().as_str(), second)}
    }};
}
