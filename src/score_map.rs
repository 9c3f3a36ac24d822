use log::debug;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::board::Digest;

pub type Score = i32;

type Shard = Mutex<FxHashMap<Digest, Score>>;

/// Digest to score table shared by search workers.
///
/// Entries live in `2^bits` independently locked shards picked by the leading
/// bytes of the digest, so workers only contend when their positions land in
/// the same shard. Every call is atomic on its own; a `read` followed by a
/// `store` is not, and concurrent writers of one digest race with the last one
/// winning. Nothing is ever evicted.
pub struct ConcurrentScoreMap {
    shards: Box<[Shard]>,
    mask: usize,
}
impl ConcurrentScoreMap {
    pub const DEFAULT_SHARD_BITS: u32 = 8;
    pub const MAX_SHARD_BITS: u32 = 16;

    pub fn new() -> Self {
        ConcurrentScoreMap::with_shard_bits(ConcurrentScoreMap::DEFAULT_SHARD_BITS)
    }
    /// # Panics
    ///
    /// Panics if `bits` exceeds [`ConcurrentScoreMap::MAX_SHARD_BITS`], the
    /// width of the shard key taken from a digest.
    pub fn with_shard_bits(bits: u32) -> Self {
        assert!(
            bits <= ConcurrentScoreMap::MAX_SHARD_BITS,
            "{bits} must be <= {}",
            ConcurrentScoreMap::MAX_SHARD_BITS
        );
        let count = 1_usize << bits;
        debug!("allocating score map with {count} shards");
        ConcurrentScoreMap {
            shards: (0..count).map(|_| Mutex::default()).collect(),
            mask: count - 1,
        }
    }
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
    fn shard_index(&self, digest: &Digest) -> usize {
        usize::from(digest.shard_key()) & self.mask
    }
    fn shard(&self, digest: &Digest) -> &Shard {
        &self.shards[self.shard_index(digest)]
    }
    /// Inserts or overwrites the score of `digest`.
    pub fn store(&self, digest: &Digest, score: Score) {
        self.shard(digest).lock().insert(*digest, score);
    }
    pub fn read(&self, digest: &Digest) -> Option<Score> {
        self.shard(digest).lock().get(digest).copied()
    }
    /// Number of entries. Only a snapshot while other threads are storing.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.lock().clear();
        }
    }
}
impl Default for ConcurrentScoreMap {
    fn default() -> Self {
        ConcurrentScoreMap::new()
    }
}
