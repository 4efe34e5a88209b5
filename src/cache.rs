//! Memoize the most recent [`generate`] result.
//!
//! The key is the postcard encoding of everything `generate` reads. A CRC32 of the key is
//! checked first; the full key bytes are compared before a hit is returned, so a checksum
//! collision can only cost a regeneration, never a stale result.

use alloc::vec::Vec;

use crc32fast::Hasher;
use serde::Serialize;

use crate::{
    config::EncodingConfig,
    generate::{Generated, generate},
    pattern_table::PatternTable,
};

#[derive(Serialize)]
struct CacheKey<'a> {
    config: &'a EncodingConfig,
    patterns: &'a PatternTable,
    sample_text: &'a str,
}

struct CacheEntry {
    crc: u32,
    key: Vec<u8>,
    generated: Generated,
}

/// Holds the last generated output and the inputs it came from.
#[derive(Default)]
pub struct GenerationCache {
    last: Option<CacheEntry>,
    hits: u32,
    misses: u32,
}

impl GenerationCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached output for these inputs, generating it first if they changed.
    ///
    /// The result is identical to calling [`generate`] directly.
    pub fn get_or_generate(
        &mut self,
        config: &EncodingConfig,
        patterns: &PatternTable,
        sample_text: &str,
    ) -> &Generated {
        let Ok(key) = postcard::to_allocvec(&CacheKey {
            config,
            patterns,
            sample_text,
        }) else {
            // Not expected for these types; serve an uncached result.
            #[cfg(feature = "defmt")]
            defmt::warn!("GenerationCache: key serialization failed");
            self.misses = self.misses.saturating_add(1);
            let generated = generate(config, patterns, sample_text);
            return &self
                .last
                .insert(CacheEntry {
                    crc: 0,
                    key: Vec::new(),
                    generated,
                })
                .generated;
        };

        let crc = compute_crc(&key);
        let entry = match self.last.take() {
            Some(entry) if entry.crc == crc && !entry.key.is_empty() && entry.key == key => {
                self.hits = self.hits.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::trace!("GenerationCache: hit (crc {=u32:x})", crc);
                entry
            }
            _ => {
                self.misses = self.misses.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::trace!("GenerationCache: miss (crc {=u32:x})", crc);
                CacheEntry {
                    crc,
                    key,
                    generated: generate(config, patterns, sample_text),
                }
            }
        };

        &self.last.insert(entry).generated
    }

    /// Forget the cached output.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Number of calls answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> u32 {
        self.hits
    }

    /// Number of calls that had to generate.
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.misses
    }
}

/// Compute CRC32 checksum.
fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
