//! Timed insert/remove trials and their line-oriented report.

use core::hint::black_box;
use std::time::Instant;

use crate::chain_table::ChainTable;
use crate::dataset::Scenario;
use crate::hash_fn::HashFn;

/// Elapsed wall-clock time of one trial's two passes, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialTiming {
    /// Time spent inserting the whole insert stream.
    pub insert_micros: u128,
    /// Time spent removing the whole remove stream.
    pub remove_micros: u128,
}

/// Runs one timed trial: a fresh table, a bulk insert pass, a bulk remove
/// pass.
///
/// The table is built fresh for every trial and dropped afterwards, so no
/// state leaks between combinations. Both passes run the keys in stream
/// order. Nothing is asserted about the table afterwards; this is purely a
/// timing probe.
pub fn run_trial(
    hash_fn: HashFn,
    table_size: usize,
    inserts: &[i64],
    removes: &[i64],
) -> TrialTiming {
    let mut table = ChainTable::new(table_size, hash_fn);

    let start = Instant::now();
    for &key in inserts {
        table.insert(key);
    }
    let insert_micros = start.elapsed().as_micros();

    let start = Instant::now();
    for &key in removes {
        table.remove(key);
    }
    let remove_micros = start.elapsed().as_micros();

    // Keep the table observable so the passes cannot be optimized away.
    black_box(&table);

    TrialTiming {
        insert_micros,
        remove_micros,
    }
}

/// Renders one trial's report block.
///
/// ```text
/// === x % m | optimistic ===
/// insert: 154 microseconds
/// remove: 161 microseconds
/// <blank line>
/// ```
pub fn format_report(hash_fn: HashFn, scenario: Scenario, timing: &TrialTiming) -> String {
    format!(
        "=== {} | {} ===\ninsert: {} microseconds\nremove: {} microseconds\n",
        hash_fn.label(),
        scenario.label(),
        timing.insert_micros,
        timing.remove_micros,
    )
}

/// Prints one trial's report block to stdout.
pub fn print_report(hash_fn: HashFn, scenario: Scenario, timing: &TrialTiming) {
    println!("{}", format_report(hash_fn, scenario, timing));
}

/// Renders the banner printed when the key count changes.
pub fn format_banner(n: usize) -> String {
    format!(
        "==============================\n#### TEST FOR N = {} ####\n==============================",
        n
    )
}

/// Prints the key-count banner to stdout.
pub fn print_banner(n: usize) {
    println!("{}", format_banner(n));
}
