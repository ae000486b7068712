use std::fmt::Display;

/// Number of hash buckets. Part of the handle encoding: changing it
/// changes every handle the table hands out.
pub const BUCKET_COUNT: usize = 10;

/// A stored symbol together with the pieces its handle decodes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry<'a> {
    pub handle: usize,
    pub symbol: &'a str,
    pub hash: usize,
    pub index: usize,
}

impl Display for SymbolEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, hash={}, index={}",
            self.handle, self.symbol, self.hash, self.index
        )
    }
}

/// Hash table with `BUCKET_COUNT` buckets and insertion-ordered chains.
///
/// Every stored value gets a position handle
/// `chain_index * BUCKET_COUNT + hash(value)`, so the hash and chain
/// index are recoverable from the bare integer. Values are append-only:
/// never mutated, never removed, chains never reordered.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    buckets: Vec<Vec<String>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    /// Polynomial rolling hash, multiplier 17, reduced into the bucket
    /// range. The accumulator wraps in 32 bits; handles depend on this
    /// staying exactly as is.
    pub fn hash(symbol: &str) -> usize {
        let mut h: i32 = 0;
        for byte in symbol.bytes() {
            h = h.wrapping_mul(17).wrapping_add(byte as i32);
        }
        h.unsigned_abs() as usize % BUCKET_COUNT
    }

    /// Appends `symbol` to the tail of its bucket chain and returns the
    /// new entry's handle.
    ///
    /// Does NOT check for duplicates: callers must `lookup` first to
    /// keep values unique. A duplicate `put` appends a second,
    /// unreachable-by-`lookup` entry with its own handle.
    pub fn put(&mut self, symbol: &str) -> usize {
        let hash = Self::hash(symbol);
        let chain = &mut self.buckets[hash];
        chain.push(symbol.to_string());
        (chain.len() - 1) * BUCKET_COUNT + hash
    }

    /// Returns the handle of `symbol` if it is stored, scanning its
    /// bucket chain head to tail. Never mutates the table.
    pub fn lookup(&self, symbol: &str) -> Option<usize> {
        let hash = Self::hash(symbol);
        self.buckets[hash]
            .iter()
            .position(|stored| stored == symbol)
            .map(|index| index * BUCKET_COUNT + hash)
    }

    /// Decodes `handle` into hash and chain index and returns the value
    /// stored there, or `None` when the chain is shorter.
    pub fn get(&self, handle: usize) -> Option<&str> {
        let hash = handle % BUCKET_COUNT;
        let index = handle / BUCKET_COUNT;
        self.buckets[hash].get(index).map(String::as_str)
    }

    /// All handles, bucket-major, chain order within each bucket. This
    /// order matches `symbols()` position for position.
    pub fn handles(&self) -> Vec<usize> {
        self.entries().map(|entry| entry.handle).collect()
    }

    /// All stored values in the same order as `handles()`.
    pub fn symbols(&self) -> Vec<&str> {
        self.entries().map(|entry| entry.symbol).collect()
    }

    /// Full enumeration, bucket 0's chain head to tail, then bucket 1's,
    /// and so on. Diagnostic dumps rely on this order being stable.
    pub fn entries(&self) -> impl Iterator<Item = SymbolEntry<'_>> {
        self.buckets.iter().enumerate().flat_map(|(hash, chain)| {
            chain.iter().enumerate().map(move |(index, symbol)| SymbolEntry {
                handle: index * BUCKET_COUNT + hash,
                symbol: symbol.as_str(),
                hash,
                index,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
