use base64::{engine::general_purpose::STANDARD, Engine as _};
use passlock::crypto::kdf::MIN_ITERATIONS;
use passlock::{decrypt, encrypt, DecryptFailure, KdfParams, SaltEncoding, Sealer, Token};
use regex::Regex;

fn fast() -> Sealer {
    Sealer::new(KdfParams::new(MIN_ITERATIONS, SaltEncoding::Raw).unwrap())
}

#[test]
fn hello_world_example() {
    let token = encrypt("hello world", "correct-horse").unwrap().to_string();

    let shape = Regex::new(r"^[A-Za-z0-9+/=]+,[A-Za-z0-9+/=]+,[A-Za-z0-9+/=]+$").unwrap();
    assert!(shape.is_match(&token), "unexpected token shape: {token}");
    assert_eq!(token.matches(',').count(), 2);

    assert_eq!(decrypt(&token, "correct-horse").unwrap(), "hello world");
    assert_eq!(decrypt(&token, "wrong-pass"), Err(DecryptFailure));
}

#[test]
fn field_sizes_match_wire_format() {
    let token = encrypt("hello world", "pw").unwrap().to_string();
    let fields: Vec<Vec<u8>> = token
        .split(',')
        .map(|f| STANDARD.decode(f).unwrap())
        .collect();
    assert_eq!(fields[0].len(), "hello world".len() + 16);
    assert_eq!(fields[1].len(), 16);
    assert_eq!(fields[2].len(), 12);
}

#[test]
fn round_trips_assorted_plaintexts() {
    let sealer = fast();
    let long = "x".repeat(10_000);
    let cases = ["", "a", "hello, world", "línea\nzwei\t三", "🔐 emoji", long.as_str()];
    for plaintext in cases {
        let token = sealer.encrypt(plaintext, "pw").unwrap().to_string();
        assert_eq!(sealer.decrypt(&token, "pw").unwrap(), plaintext);
    }
}

#[test]
fn empty_plaintext_with_default_params() {
    let token = encrypt("", "pw").unwrap().to_string();
    assert_eq!(decrypt(&token, "pw").unwrap(), "");
}

#[test]
fn empty_password_round_trips() {
    let sealer = fast();
    let token = sealer.encrypt("secret", "").unwrap().to_string();
    assert_eq!(sealer.decrypt(&token, "").unwrap(), "secret");
    assert!(sealer.decrypt(&token, " ").is_err());
}

#[test]
fn same_inputs_give_different_tokens() {
    let sealer = fast();
    let a = sealer.encrypt("same", "pw").unwrap().to_string();
    let b = sealer.encrypt("same", "pw").unwrap().to_string();
    assert_ne!(a, b);
}

#[test]
fn every_single_bit_flip_in_ciphertext_is_rejected() {
    let sealer = fast();
    let token = sealer.encrypt("hi", "pw").unwrap();

    for byte in 0..token.ciphertext().len() {
        for bit in 0..8 {
            let mut ciphertext = token.ciphertext().to_vec();
            ciphertext[byte] ^= 1 << bit;
            let tampered = Token::new(ciphertext, *token.salt(), *token.nonce());
            assert_eq!(
                sealer.decrypt(&tampered.to_string(), "pw"),
                Err(DecryptFailure),
                "flip of byte {byte} bit {bit} was accepted"
            );
        }
    }
}

#[test]
fn malformed_tokens_fail_uniformly() {
    let sealer = fast();
    let valid = sealer.encrypt("x", "pw").unwrap().to_string();
    let cases = [
        String::new(),
        ",,".to_owned(),
        "onlyonefield".to_owned(),
        "a,b".to_owned(),
        format!("{valid},extra"),
        valid.replace(',', ";"),
        format!("{valid} "),
        "***,***,***".to_owned(),
    ];
    for token in &cases {
        assert_eq!(sealer.decrypt(token, "pw"), Err(DecryptFailure), "{token:?}");
    }
}

#[test]
fn failure_display_does_not_reveal_kind() {
    let sealer = fast();
    let valid = sealer.encrypt("x", "pw").unwrap().to_string();
    let malformed = sealer.decrypt("a,b", "pw").unwrap_err();
    let wrong_password = sealer.decrypt(&valid, "nope").unwrap_err();
    assert_eq!(malformed, wrong_password);
    assert_eq!(malformed.to_string(), wrong_password.to_string());
}

#[test]
fn decryption_is_idempotent() {
    let sealer = fast();
    let token = sealer.encrypt("again", "pw").unwrap().to_string();
    assert_eq!(sealer.decrypt(&token, "pw"), sealer.decrypt(&token, "pw"));
    assert_eq!(sealer.decrypt(&token, "bad"), sealer.decrypt(&token, "bad"));
}

#[tokio::test]
async fn free_async_functions_round_trip() {
    use zeroize::Zeroizing;

    let token = passlock::encrypt_async("async".into(), Zeroizing::new("pw".into()))
        .await
        .unwrap();
    let plaintext = passlock::decrypt_async(token.to_string(), Zeroizing::new("pw".into()))
        .await
        .unwrap();
    assert_eq!(plaintext, "async");
}
