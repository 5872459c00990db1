use chain_bench::ChainTable;
use chain_bench::HashFn;
use chain_bench::Scenario;
use chain_bench::dataset;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "keys", default_value_t = 10000)]
    keys: usize,

    #[arg(short = 'b', long = "buckets", default_value_t = 10007)]
    buckets: usize,
}

fn main() {
    let args = Args::parse();

    println!(
        "Filling {}-bucket tables with {} keys per scenario...",
        args.buckets, args.keys
    );

    for scenario in Scenario::ALL {
        let keys = dataset::generate(scenario, args.keys, args.buckets);
        for hash_fn in HashFn::ALL {
            let mut table = ChainTable::new(args.buckets, hash_fn);
            for &key in &keys {
                table.insert(key);
            }

            println!();
            println!("=== {} | {} ===", table.hash_fn().label(), scenario.label());
            table.chain_stats().print();
            table.print_chain_histogram();
        }
    }
}
