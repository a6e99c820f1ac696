pub mod classify_ops;
pub mod convert_ops;

use std::fs;
use std::io::{self, BufRead};
use std::process;

use kana_core::rules::RuleSet;
use tracing::debug;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom rule dataset from a TOML file and return the global
/// rule set.
pub fn load_rules(path: Option<&str>) -> &'static RuleSet {
    if let Some(path) = path {
        let content = die!(fs::read_to_string(path), "Error reading rules file: {}");
        die!(RuleSet::init_custom(content), "Error loading rules: {}");
        debug!(path, "custom rules installed");
    }
    RuleSet::global()
}

/// Texts given on the command line, or each non-empty stdin line.
pub fn collect_inputs(texts: Vec<String>) -> Vec<String> {
    if !texts.is_empty() {
        return texts;
    }
    let stdin = io::stdin();
    let lines = die!(
        stdin.lock().lines().collect::<Result<Vec<_>, _>>(),
        "Error reading stdin: {}"
    );
    non_empty_lines(lines)
}

fn non_empty_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}
