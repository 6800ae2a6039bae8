pub mod rules;

pub use rules::{RuleFile, load_rule_file, parse_rule_file};
