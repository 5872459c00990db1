use chain_bench::HashFn;
use chain_bench::Scenario;
use chain_bench::dataset;
use chain_bench::runner;

fn main() {
    // 10007 is prime, so neither sequential keys nor the division-by-ten
    // variant share a common factor with the bucket count.
    let table_size = 10007;
    let key_counts = [1_000, 10_000, 50_000];

    for n in key_counts {
        runner::print_banner(n);
        for scenario in Scenario::ALL {
            let inserts = dataset::generate(scenario, n, table_size);
            let removes = inserts.clone();
            for hash_fn in HashFn::ALL {
                let timing = runner::run_trial(hash_fn, table_size, &inserts, &removes);
                runner::print_report(hash_fn, scenario, &timing);
            }
        }
    }
}
