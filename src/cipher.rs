//! Keyed substitution tables.
//!
//! A table is a permutation of the 256 byte values, derived from nothing but
//! the key. A decrypting process regenerates the exact table the encrypting
//! process used, so tables are never persisted.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sha3::{Digest, Sha3_256};

pub type CipherTable = [u8; 256];

const TABLE_SEED_DOMAIN: &[u8] = b"sluice_cipher_table";

/// Generate the substitution table for `key`: the values 0..=255 shuffled by
/// a generator seeded only from the key.
pub fn encryption_table(key: u32) -> CipherTable {
    let mut table: CipherTable = [0; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        *slot = value as u8;
    }

    let mut rng = StdRng::from_seed(table_seed(key));
    table.shuffle(&mut rng);
    table
}

/// The functional inverse of `encryption_table(key)`:
/// `decryption_table(key)[encryption_table(key)[b]] == b` for every byte.
pub fn decryption_table(key: u32) -> CipherTable {
    let encryption = encryption_table(key);
    let mut decryption: CipherTable = [0; 256];
    for (plain, &cipher) in encryption.iter().enumerate() {
        decryption[cipher as usize] = plain as u8;
    }
    decryption
}

fn table_seed(key: u32) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(TABLE_SEED_DOMAIN);
    hasher.update(key.to_le_bytes());
    hasher.finalize().into()
}
