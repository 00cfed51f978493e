use cryptal_rand::rng::chacha20::ChaCha20;

// -------------------------------------------------------
// 1. KNOWN-ANSWER TESTS
// -------------------------------------------------------

#[test]
fn chacha20_zero_key_first_keystream_block() {
    // All-zero key and nonce, counter 0: the classical reference
    // keystream (the nonce layout matches the IETF variant here because
    // every nonce word is zero).
    let mut cipher = ChaCha20::new(&[0; 32], &[0; 8]);

    let expected = hex::decode(
        "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
         da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
    )
    .unwrap();

    assert_eq!(&cipher.keystream_block()[..], &expected[..]);
}

#[test]
fn chacha20_zero_key_second_keystream_block() {
    let mut cipher = ChaCha20::new(&[0; 32], &[0; 8]);
    cipher.keystream_block();

    let expected = hex::decode(
        "9f07e7be5551387a98ba977c732d080dcb0f29a048e3656912c6533e32ee7aed\
         29b721769ce64e43d57133b074d839d531ed1f28510afb45ace10a1f4b794d6f",
    )
    .unwrap();

    assert_eq!(&cipher.keystream_block()[..], &expected[..]);
}

// -------------------------------------------------------
// 2. DETERMINISM AND STREAM SEPARATION
// -------------------------------------------------------

#[test]
fn chacha20_same_key_and_nonce_produce_identical_streams() {
    let key = [0x42; 32];
    let nonce = [0x24; 8];

    let mut a = ChaCha20::new(&key, &nonce);
    let mut b = ChaCha20::new(&key, &nonce);

    for _ in 0..32 {
        assert_eq!(a.keystream_block(), b.keystream_block());
    }
}

#[test]
fn chacha20_different_nonces_produce_different_first_blocks() {
    let key = [0x42; 32];

    let mut base = ChaCha20::new(&key, &[0; 8]);
    let base_block = base.keystream_block();

    for i in 0..8 {
        let mut nonce = [0u8; 8];
        nonce[i] = 1;

        let mut cipher = ChaCha20::new(&key, &nonce);
        assert_ne!(cipher.keystream_block(), base_block, "nonce byte {i}");
    }
}

#[test]
fn chacha20_different_keys_produce_different_first_blocks() {
    let nonce = [7; 8];

    let mut base = ChaCha20::new(&[0; 32], &nonce);
    let base_block = base.keystream_block();

    let mut other = ChaCha20::new(&[1; 32], &nonce);
    assert_ne!(other.keystream_block(), base_block);
}

#[test]
fn chacha20_successive_blocks_differ() {
    let mut cipher = ChaCha20::new(&[5; 32], &[6; 8]);

    let first = cipher.keystream_block();
    let second = cipher.keystream_block();

    assert_ne!(first, second);
}

// -------------------------------------------------------
// 3. XOR ENCRYPTION / DECRYPTION
// -------------------------------------------------------

#[test]
fn chacha20_xor_round_trips() {
    let key = [0xAB; 32];
    let nonce = [0xCD; 8];

    // 100 exercises the partial trailing block, 128 the exact multiple.
    for len in [1usize, 63, 64, 100, 128, 1000] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
        let mut ciphertext = vec![0u8; len];
        let mut recovered = vec![0u8; len];

        let mut enc = ChaCha20::new(&key, &nonce);
        enc.xor(&plaintext, &mut ciphertext);

        let mut dec = ChaCha20::new(&key, &nonce);
        dec.xor(&ciphertext, &mut recovered);

        assert_eq!(recovered, plaintext, "length {len}");
        assert_ne!(ciphertext, plaintext, "length {len}");
    }
}

#[test]
fn chacha20_xor_of_zeros_is_the_raw_keystream() {
    let key = [0x77; 32];
    let nonce = [0x11; 8];

    let zeros = [0u8; 128];
    let mut stream = [0u8; 128];
    let mut cipher = ChaCha20::new(&key, &nonce);
    cipher.xor(&zeros, &mut stream);

    let mut blocks = ChaCha20::new(&key, &nonce);
    assert_eq!(&stream[..64], &blocks.keystream_block()[..]);
    assert_eq!(&stream[64..], &blocks.keystream_block()[..]);
}
