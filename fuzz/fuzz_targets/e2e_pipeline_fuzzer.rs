//! Fuzz target for the full encrypt/frame/decode/decrypt pipeline
//!
//! Drives arbitrary plaintext and seed bytes through the whole core and
//! checks the round-trip invariant, then corrupts the encoded payload and
//! checks that decryption fails closed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sealgram_crypto::{KeySeed, decrypt, derive_message_key, encrypt_with_nonce};
use sealgram_proto::Envelope;

fuzz_target!(|input: (&[u8], [u8; 20], [u8; 12], u8)| {
    let (plaintext, seed_bytes, nonce, flip) = input;

    let seed = KeySeed::from_bytes(&seed_bytes).expect("20 bytes is a valid seed");
    let key = derive_message_key(&seed);

    let ciphertext = encrypt_with_nonce(plaintext, &key, nonce);
    let payload = Envelope::v1(nonce, ciphertext).encode();

    let envelope = Envelope::decode(&payload).expect("encoded payload must decode");
    let decrypted =
        decrypt(&envelope.nonce, &envelope.ciphertext, &key).expect("round-trip must decrypt");
    assert_eq!(decrypted, plaintext);

    // Corrupt one ciphertext byte; authentication must reject it
    let mut corrupted = envelope.ciphertext.clone();
    let index = usize::from(flip) % corrupted.len();
    corrupted[index] ^= 0x01;
    assert!(decrypt(&envelope.nonce, &corrupted, &key).is_err());
});
