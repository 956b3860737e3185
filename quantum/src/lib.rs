pub mod problem_selector;
pub mod units;
pub mod utility;
pub mod vector;
