pub mod board;
pub mod rule_set;
pub mod simulate;

mod parse_util;
