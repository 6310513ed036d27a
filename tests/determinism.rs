use docprint::{
    DigestAlgorithm, DigestOptions, Fingerprint, Fingerprinter, HashFingerprint, WinnowConfig,
    WinnowFingerprint, WinnowOptions, sanitize, winnow_artifacts,
};
use proptest::prelude::*;

const PASSAGE: &str = "It was the best of times, it was the worst of times; it was the age \
                       of wisdom, it was the age of foolishness.";

#[test]
fn equivalent_inputs_share_a_winnow_fingerprint() {
    let a = WinnowFingerprint::new().from_text(" Hello   world!  How ARE you? ");
    let b = WinnowFingerprint::new().from_text("hello world how are you");

    let fp_a = a.generate(None).expect("first fingerprint");
    let fp_b = b.generate(None).expect("second fingerprint");
    assert_eq!(fp_a, fp_b);
}

#[test]
fn generate_is_idempotent() {
    let fp = WinnowFingerprint::new().from_text(PASSAGE);
    let first = fp.generate(None).unwrap();
    for _ in 0..5 {
        assert_eq!(fp.generate(None).unwrap(), first);
    }

    let digest = HashFingerprint::new().from_text(PASSAGE);
    let first = digest.generate(None).unwrap();
    assert_eq!(digest.generate(None).unwrap(), first);
}

#[test]
fn one_character_change_fails_verification() {
    let opts = WinnowOptions::new().with_threshold(5).with_noise_threshold(3);
    let fp = WinnowFingerprint::new().from_text(PASSAGE);
    let generated = fp.generate(Some(&opts)).unwrap();
    assert!(fp.verify(&generated, Some(&opts)).unwrap());

    let mut tampered = generated.clone().into_bytes();
    let idx = tampered
        .iter()
        .position(u8::is_ascii_digit)
        .expect("fingerprint has digits");
    tampered[idx] = if tampered[idx] == b'9' { b'8' } else { tampered[idx] + 1 };
    let tampered = String::from_utf8(tampered).unwrap();
    assert!(!fp.verify(&tampered, Some(&opts)).unwrap());
}

#[test]
fn every_digest_verifies_its_own_output() {
    let fp = HashFingerprint::new().from_text(PASSAGE);
    for algorithm in DigestAlgorithm::ALL {
        let opts = DigestOptions::from(algorithm);
        let generated = fp.generate(Some(&opts)).unwrap();
        assert_eq!(generated.len(), algorithm.hex_len());
        assert!(fp.verify(&generated, Some(&opts)).unwrap());
    }
}

#[test]
fn local_edit_keeps_distant_anchors() {
    let original = WinnowFingerprint::new().from_text(PASSAGE);
    let edited = WinnowFingerprint::new().from_text(PASSAGE.replacen("best", "BEST!", 1));
    let tail_edit = WinnowFingerprint::new().from_text(PASSAGE.replacen("foolishness", "folly", 1));

    let a = original.fingerprint(None).unwrap();
    let b = edited.fingerprint(None).unwrap();
    let c = tail_edit.fingerprint(None).unwrap();
    // Case and punctuation edits vanish during sanitizing.
    assert_eq!(a, b);
    let head: Vec<_> = a.anchors().iter().take(3).collect();
    let head_c: Vec<_> = c.anchors().iter().take(3).collect();
    assert_eq!(head, head_c);
}

proptest! {
    #[test]
    fn stage_counts_hold(text in "[a-z ,.]{0,80}", threshold in 1usize..8, noise in 1usize..8) {
        prop_assume!(noise <= threshold);
        let cfg = WinnowConfig::new(threshold, noise);
        let clean = sanitize(&text);
        let len = clean.chars().count();

        match winnow_artifacts(&clean, &cfg) {
            Ok(artifacts) => {
                prop_assert_eq!(artifacts.kgram_count(), len - threshold + 1);
                prop_assert_eq!(artifacts.hashes.len(), artifacts.kgram_count());
                prop_assert_eq!(
                    artifacts.selections.len(),
                    artifacts.hashes.len() - cfg.window_size() + 1
                );
                prop_assert!(artifacts.fingerprint.len() <= artifacts.selections.len());
                let positions: Vec<usize> = artifacts.fingerprint.positions().collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(positions.iter().all(|&p| p < artifacts.hashes.len()));
            }
            Err(_) => prop_assert!(len < threshold + cfg.window_size() - 1),
        }
    }

    #[test]
    fn serialized_fingerprint_parses_back(text in "[a-z]{15,60}") {
        let fp = WinnowFingerprint::new().from_text(text);
        let fingerprint = fp.fingerprint(None).unwrap();
        let json = fingerprint.to_json().unwrap();
        prop_assert_eq!(Fingerprint::from_json(&json).unwrap(), fingerprint);
        prop_assert!(fp.verify(&json, None).unwrap());
    }
}
