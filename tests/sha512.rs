use cryptal_rand::Error;
use cryptal_rand::hash::{Sha512, sha512};

fn expect_sha512_eq(input: &[u8], expected_hex: &str) {
    let expected = hex::decode(expected_hex).unwrap();
    let got = sha512(input);

    assert_eq!(
        &got[..],
        &expected[..],
        "Digest mismatch for {}-byte input",
        input.len(),
    );
}

fn sha512_ref(input: &[u8]) -> Vec<u8> {
    use sha2::Digest;

    let mut hasher = sha2::Sha512::new();
    hasher.update(input);
    hasher.finalize().to_vec()
}

// -------------------------------------------------------
// 1. OFFICIAL SHA-512 TEST VECTORS
// -------------------------------------------------------

#[test]
fn sha512_empty_vector() {
    expect_sha512_eq(
        &[],
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    );
}

#[test]
fn sha512_abc_vector() {
    expect_sha512_eq(
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    );
}

#[test]
fn sha512_two_block_vector() {
    expect_sha512_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c335\
         96fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
    );
}

#[test]
fn sha512_known_phrase() {
    expect_sha512_eq(
        b"The quick brown fox jumps over the lazy dog",
        "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
         2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    );
}

#[test]
fn sha512_million_a_vector() {
    let input = vec![b'a'; 1_000_000];

    expect_sha512_eq(
        &input,
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    );
}

// -------------------------------------------------------
// 2. STREAMING / ALIGNMENT INDEPENDENCE
// -------------------------------------------------------

#[test]
fn sha512_misaligned_repeated_updates() {
    // 1000 repetitions of a 7-byte chunk: every update straddles a
    // block boundary somewhere.
    let mut ctx = Sha512::new();
    for _ in 0..1000 {
        ctx.update(b"abcdefg");
    }

    let expected = hex::decode(
        "72d01dde5b253701c64947b6cb4015f6f76a0b181f340bc902caeadcf740c3d9\
         10a7747964fa1daf276603719f0db6baa7236d3662cda04255c06216419230c7",
    )
    .unwrap();

    assert_eq!(&ctx.finalize()[..], &expected[..]);
}

#[test]
fn sha512_chunking_does_not_affect_digest() {
    let input: Vec<u8> = (0..1021).map(|i| (i % 251) as u8).collect();
    let oneshot = sha512(&input);

    for chunk_len in [1, 3, 7, 63, 64, 65, 127, 128, 129, 500] {
        let mut ctx = Sha512::new();
        for chunk in input.chunks(chunk_len) {
            ctx.update(chunk);
        }

        assert_eq!(ctx.finalize(), oneshot, "chunk length {chunk_len}");
    }
}

#[test]
fn sha512_empty_updates_are_no_ops() {
    let mut ctx = Sha512::new();
    ctx.update(&[]);
    ctx.update(b"abc");
    ctx.update(&[]);

    assert_eq!(ctx.finalize(), sha512(b"abc"));
}

#[test]
fn sha512_million_a_streamed() {
    let chunk = [b'a'; 100];
    let mut ctx = Sha512::new();
    for _ in 0..10_000 {
        ctx.update(&chunk);
    }

    assert_eq!(ctx.finalize(), sha512(&vec![b'a'; 1_000_000]));
}

// -------------------------------------------------------
// 3. TRUNCATED DIGESTS
// -------------------------------------------------------

#[test]
fn sha512_truncated_digest_is_a_prefix() {
    let full = sha512(b"truncate me");

    for len in [0, 1, 8, 28, 32, 48, 63, 64] {
        let mut out = vec![0u8; len];
        let mut ctx = Sha512::new();
        ctx.update(b"truncate me");
        ctx.finalize_into(&mut out).unwrap();

        assert_eq!(&out[..], &full[..len]);
    }
}

#[test]
fn sha512_oversize_digest_request_is_rejected() {
    let mut out = [0u8; 65];
    let err = Sha512::new().finalize_into(&mut out).unwrap_err();

    assert_eq!(err, Error::DigestTooWide(65));
}

// -------------------------------------------------------
// 4. DIFFERENTIAL AGAINST THE sha2 CRATE
// -------------------------------------------------------

#[test]
fn sha512_matches_reference_for_all_short_lengths() {
    // Covers every padding case around the 112-byte spill threshold
    // and the 128-byte block boundary.
    let input: Vec<u8> = (0..300).map(|i| (i * 7 % 256) as u8).collect();

    for len in 0..=input.len() {
        assert_eq!(
            &sha512(&input[..len])[..],
            &sha512_ref(&input[..len])[..],
            "length {len}",
        );
    }
}

#[test]
fn sha512_matches_reference_for_multiblock_input() {
    let input: Vec<u8> = (0..4096 + 17).map(|i| (i % 256) as u8).collect();

    assert_eq!(&sha512(&input)[..], &sha512_ref(&input)[..]);
}
