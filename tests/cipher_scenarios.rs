//! Library-level scenarios across the cipher front-ends

use vigenere::{
    CipherOptions, Decrypt, Encrypt, ForceCase, Job, Key, Mode, NonLetterMode, Sink, Source,
    Vigenere,
};

const TEXTS: &[&str] = &[
    "",
    "Attack at dawn!",
    "The quick brown fox jumps over the lazy dog.",
    "Mixed\tWhitespace\nand ünïcödé, 123",
];

#[test]
fn decrypt_inverts_encrypt_with_default_options() {
    for key in ["A", "LEMON", "whyrust", "Zz"] {
        let cipher = Vigenere::new(key).unwrap();
        for text in TEXTS {
            assert_eq!(cipher.decrypt(&cipher.encrypt(text)), *text, "key {}", key);
        }
    }
}

#[test]
fn identity_key_leaves_text_unchanged() {
    let cipher = Vigenere::new("aaaa").unwrap();
    for text in TEXTS {
        assert_eq!(cipher.encrypt(text), *text);
    }
}

#[test]
fn output_length_matches_input_when_keeping_non_letters() {
    let cipher = Vigenere::new("LEMON").unwrap();
    for text in TEXTS {
        assert_eq!(cipher.encrypt(text).chars().count(), text.chars().count());
    }
}

#[test]
fn iterator_and_struct_agree() {
    let key = Key::new("WHYRUST").unwrap();
    let options = CipherOptions::new().with_force_case(ForceCase::ToLower);
    let cipher = Vigenere::with_key(key.clone()).with_options(options);

    for text in TEXTS {
        let via_iter: String = text.chars().encrypt(&key, options).collect();
        assert_eq!(via_iter, cipher.encrypt(text));

        let via_iter: String = text.chars().decrypt(&key, options).collect();
        assert_eq!(via_iter, cipher.decrypt(text));
    }
}

#[test]
fn stream_matches_whole_text_for_every_split() {
    let cipher = Vigenere::new("LEMON").unwrap();
    let text = "Attack at dawn, retreat at dusk.";
    let expected = cipher.encrypt(text);

    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    for split in boundaries {
        let mut stream = cipher.stream(Mode::Encrypt);
        let mut output = stream.apply(&text[..split]);
        output.push_str(&stream.apply(&text[split..]));
        assert_eq!(output, expected, "split at {}", split);
    }
}

#[test]
fn skipping_non_letters_yields_letters_only() {
    let options = CipherOptions::new().with_non_letters(NonLetterMode::Skip);
    let cipher = Vigenere::new("WHYRUST").unwrap().with_options(options);

    let output = cipher.encrypt("TO EMPOWER, EVERYONE!");
    assert_eq!(output, "PVCDJGPAYCMYJRKUC");
    assert!(output.chars().all(|ch| ch.is_ascii_alphabetic()));
}

#[tokio::test]
async fn job_round_trip_through_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let plain = dir.path().join("plain.txt");
    let encrypted = dir.path().join("encrypted.txt");
    let decrypted = dir.path().join("decrypted.txt");
    let text = "Line one\nLine two\n\nLine four, with punctuation!\n";
    std::fs::write(&plain, text).unwrap();

    let cipher = Vigenere::new("Vigenere").unwrap();
    Job::new(
        cipher.clone(),
        Mode::Encrypt,
        Source::File(plain),
        Sink::File(encrypted.clone()),
    )
    .run()
    .await
    .unwrap();

    let outcome = Job::new(
        cipher,
        Mode::Decrypt,
        Source::File(encrypted.clone()),
        Sink::File(decrypted.clone()),
    )
    .run()
    .await
    .unwrap();

    assert_ne!(std::fs::read_to_string(&encrypted).unwrap(), text);
    assert_eq!(std::fs::read_to_string(&decrypted).unwrap(), text);
    assert_eq!(outcome.stats.characters, text.chars().count());
}
