//! Property checks for the public hashing contract.
//!
//! The sha2 crate is the reference; random inputs come from a seeded
//! ChaCha20 generator so failures reproduce.

use std::collections::{LinkedList, VecDeque};
use std::thread;

use fips_sha_crypto::{hash, hash_elements, Algorithm, HashAlgorithm, Sha256, Sha256Context};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Digest as _;

fn reference(data: &[u8]) -> [u8; 32] {
    sha2::Sha256::digest(data).into()
}

#[test]
fn test_known_vectors() {
    assert_eq!(
        hash(b"").to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hash(b"abc").to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    let expected = hex::decode("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
        .unwrap();
    assert_eq!(hash(&vec![b'a'; 1_000_000]).as_bytes().as_slice(), expected.as_slice());
}

#[test]
fn test_deterministic() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..32 {
        let len = rng.gen_range(0..300);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        assert_eq!(hash(&data), hash(&data));
    }
}

#[test]
fn test_fixed_output_size_across_boundaries() {
    for len in [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 128, 1_000_000] {
        let data = vec![0x5au8; len];
        let digest = hash(&data);
        assert_eq!(digest.as_bytes().len(), 32, "len {}", len);
        assert_eq!(*digest.as_bytes(), reference(&data), "len {}", len);
    }
}

#[test]
fn test_random_lengths_match_reference() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for len in 0..260usize {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        assert_eq!(*hash(&data).as_bytes(), reference(&data), "len {}", len);
    }
}

#[test]
fn test_single_bit_flip_changes_digest() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut data = vec![0u8; 100];
    rng.fill_bytes(&mut data);
    let original = hash(&data);

    for byte in 0..data.len() {
        for bit in 0..8 {
            let mut flipped = data.clone();
            flipped[byte] ^= 1 << bit;
            assert_ne!(hash(&flipped), original, "byte {} bit {}", byte, bit);
        }
    }
}

#[test]
fn test_generic_sequence_equivalence() {
    let text = "The quick brown fox jumps over the lazy dog";
    let expected = hash(text.as_bytes());

    let vec: Vec<u8> = text.bytes().collect();
    let list: LinkedList<u8> = text.bytes().collect();
    let deque: VecDeque<i8> = text.bytes().map(|b| b as i8).collect();
    let mut array = [0u8; 43];
    array.copy_from_slice(text.as_bytes());

    assert_eq!(hash_elements(&vec), expected);
    assert_eq!(hash_elements(list), expected);
    assert_eq!(hash_elements(deque), expected);
    assert_eq!(hash_elements(array), expected);
    assert_eq!(hash_elements(text.chars()), expected);
    assert_eq!(hash_elements(String::from(text).bytes()), expected);

    let mut engine = Sha256::new();
    assert_eq!(engine.encrypt_elements(text.chars()).unwrap(), expected);
}

#[test]
fn test_caller_buffer_not_mutated() {
    let message: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let snapshot = message.clone();

    let _ = hash(&message);
    let _ = hash_elements(&message);
    let mut ctx = Sha256Context::new();
    ctx.update(&message);
    let _ = ctx.finalize();

    assert_eq!(message, snapshot);
}

#[test]
fn test_streaming_matches_one_shot_for_random_chunking() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut data = vec![0u8; 5000];
    rng.fill_bytes(&mut data);
    let expected = hash(&data);

    for _ in 0..20 {
        let mut ctx = Sha256Context::new();
        let mut rest = data.as_slice();
        while !rest.is_empty() {
            let take = rng.gen_range(1..=rest.len().min(150));
            ctx.update(&rest[..take]);
            rest = &rest[take..];
        }
        assert_eq!(ctx.finalize(), expected);
    }
}

#[test]
fn test_independent_engines_on_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            thread::spawn(move || {
                let data = vec![i; 10_000 + i as usize];
                (data.clone(), Sha256::with_message(data).encrypt())
            })
        })
        .collect();

    for handle in handles {
        let (data, digest) = handle.join().unwrap();
        assert_eq!(*digest.as_bytes(), reference(&data));
    }
}

#[test]
fn test_factory_engine_matches_one_shot() {
    let mut engine = Algorithm::Sha256.create();
    let data = b"factory-built engine";
    assert_eq!(engine.run(data).unwrap(), hash(data).as_bytes().to_vec());
}
