use crate::hash_fn::HashFn;

/// A separate-chaining hash table over `i64` keys.
///
/// The bucket count is fixed at construction and the table never resizes,
/// whatever the load factor reaches; chains simply grow. Each bucket is an
/// ordered chain; insertion appends, so a chain holds its keys in arrival
/// order. Duplicate keys are stored as separate entries.
///
/// There is deliberately no lookup operation: the table exists to measure
/// insertion and removal, and exposing `find` would invite measuring
/// something else.
///
/// # Examples
///
/// ```rust
/// # use chain_bench::ChainTable;
/// # use chain_bench::HashFn;
/// #
/// let mut table = ChainTable::new(10007, HashFn::Modulo);
/// table.insert(42);
/// table.insert(42);
/// assert_eq!(table.len(), 2);
///
/// table.remove(42);
/// assert_eq!(table.len(), 1);
///
/// // Removing an absent key is a no-op.
/// table.remove(7);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ChainTable {
    buckets: Vec<Vec<i64>>,
    hash_fn: HashFn,
    populated: usize,
}

impl ChainTable {
    /// Creates a table with `buckets` empty chains bound to `hash_fn`.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    pub fn new(buckets: usize, hash_fn: HashFn) -> Self {
        assert!(buckets > 0, "bucket count must be non-zero");
        ChainTable {
            buckets: vec![Vec::new(); buckets],
            hash_fn,
            populated: 0,
        }
    }

    /// Appends `key` to the chain of its bucket.
    ///
    /// No uniqueness check is performed; inserting the same key twice stores
    /// two entries. Amortized O(1), pathological clustering aside.
    #[inline]
    pub fn insert(&mut self, key: i64) {
        let index = self.hash_fn.bucket(key, self.buckets.len());
        self.buckets[index].push(key);
        self.populated += 1;
    }

    /// Removes the first entry equal to `key` from its bucket's chain.
    ///
    /// Silently does nothing when no entry matches. Cost is proportional to
    /// the chain length.
    #[inline]
    pub fn remove(&mut self, key: i64) {
        let index = self.hash_fn.bucket(key, self.buckets.len());
        let chain = &mut self.buckets[index];
        if let Some(position) = chain.iter().position(|&stored| stored == key) {
            chain.remove(position);
            self.populated -= 1;
        }
    }

    /// Returns the total number of stored entries.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the fixed bucket count.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket-index function this table is bound to.
    pub fn hash_fn(&self) -> HashFn {
        self.hash_fn
    }

    /// Returns one bucket's chain, in arrival order.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain(&self, index: usize) -> &[i64] {
        &self.buckets[index]
    }

    /// Computes chain-shape statistics for the current table state.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> ChainStats {
        let occupied_buckets = self.buckets.iter().filter(|chain| !chain.is_empty()).count();
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);

        ChainStats {
            populated: self.populated,
            buckets: self.buckets.len(),
            occupied_buckets,
            longest_chain,
            load_factor: self.populated as f64 / self.buckets.len() as f64,
        }
    }

    /// Computes a histogram of chain lengths for the current table state.
    ///
    /// Returns a vector of length `OVERFLOW_BIN + 2` where index `l` counts
    /// the buckets whose chain holds exactly `l` keys, and the final bin
    /// counts every bucket longer than `OVERFLOW_BIN`.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = vec![0usize; OVERFLOW_BIN + 2];
        for chain in &self.buckets {
            let bin = chain.len().min(OVERFLOW_BIN + 1);
            hist[bin] += 1;
        }
        hist
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    ///
    /// Each row corresponds to a chain-length bin, plus a `9+` row for
    /// chains longer than [`OVERFLOW_BIN`].
    #[cfg(any(test, feature = "stats"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("chain histogram ({} entries):", self.populated);
        for (length, &count) in hist.iter().enumerate() {
            let bar_len = (count * max_bar).div_ceil(max);
            let bar = "#".repeat(if count == 0 { 0 } else { bar_len.max(1) });
            if length <= OVERFLOW_BIN {
                println!("{:>3} | {:>7} {}", length, count, bar);
            } else {
                println!("{:>2}+ | {:>7} {}", OVERFLOW_BIN + 1, count, bar);
            }
        }
    }
}

/// Largest chain length with its own histogram bin; longer chains share one
/// overflow bin.
#[cfg(any(test, feature = "stats"))]
pub const OVERFLOW_BIN: usize = 8;

/// Chain-shape statistics for a [`ChainTable`].
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct ChainStats {
    /// Number of entries currently in the table.
    pub populated: usize,
    /// Fixed bucket count.
    pub buckets: usize,
    /// Number of buckets with a non-empty chain.
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Entries per bucket (populated / buckets).
    pub load_factor: f64,
}

#[cfg(any(test, feature = "stats"))]
impl ChainStats {
    /// Pretty-print the chain statistics.
    pub fn print(&self) {
        println!("=== Chain Statistics ===");
        println!(
            "Population: {} entries in {} buckets ({:.2} load factor)",
            self.populated, self.buckets, self.load_factor
        );
        println!(
            "Occupied buckets: {} ({:.2}%)",
            self.occupied_buckets,
            self.occupied_buckets as f64 / self.buckets as f64 * 100.0
        );
        println!("Longest chain: {}", self.longest_chain);
    }
}
