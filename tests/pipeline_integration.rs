use std::fs;

use docprint::{
    DocprintConfig, Document, FingerprintError, Fingerprinter, HashFingerprint, StrategyConfig,
    WinnowFingerprint, fingerprint_document, fingerprint_file_with_config,
};
use tempfile::tempdir;

const ESSAY: &str = "Winnowing selects a small subset of k-gram hashes.\n\
                     Any long enough shared passage keeps at least one of them!\n";

#[test]
fn file_and_text_loading_agree() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("essay.txt");
    fs::write(&path, ESSAY).unwrap();

    let from_file = WinnowFingerprint::new().from_file(&path).unwrap();
    let from_text = WinnowFingerprint::new().from_text(ESSAY);
    assert_eq!(from_file.document(), from_text.document());
    assert_eq!(
        from_file.generate(None).unwrap(),
        from_text.generate(None).unwrap()
    );

    let digest_file = HashFingerprint::new().from_file(&path).unwrap();
    let digest_text = HashFingerprint::new().from_text(ESSAY);
    assert_eq!(
        digest_file.generate(None).unwrap(),
        digest_text.generate(None).unwrap()
    );
}

#[test]
fn yaml_config_drives_both_strategies() {
    let dir = tempdir().unwrap();
    let doc_path = dir.path().join("essay.txt");
    fs::write(&doc_path, ESSAY).unwrap();

    let winnow_cfg = dir.path().join("winnow.yaml");
    fs::write(
        &winnow_cfg,
        "version: \"1.0\"\nname: screening\nstrategy: winnow\nwinnow:\n  threshold: 8\n  noise_threshold: 4\n",
    )
    .unwrap();
    let digest_cfg = dir.path().join("digest.yaml");
    fs::write(
        &digest_cfg,
        "version: \"1.0\"\nstrategy: digest\ndigest:\n  algorithm: sha-1\n",
    )
    .unwrap();

    let winnowed = fingerprint_file_with_config(&doc_path, &winnow_cfg).unwrap();
    assert!(winnowed.starts_with("[["));
    let loaded = DocprintConfig::from_file(&winnow_cfg).unwrap();
    let fp = WinnowFingerprint::new().from_file(&doc_path).unwrap();
    match loaded.strategy_config().unwrap() {
        StrategyConfig::Winnow(opts) => assert!(fp.verify(&winnowed, Some(&opts)).unwrap()),
        other => panic!("expected winnow strategy, got {other:?}"),
    }

    let digested = fingerprint_file_with_config(&doc_path, &digest_cfg).unwrap();
    assert_eq!(digested.len(), 40);
}

#[test]
fn strategy_config_from_json_matches_generators() {
    let doc = Document::from_text(ESSAY);
    let cfg: StrategyConfig =
        serde_json::from_str(r#"{"strategy":"winnow","noise_threshold":3}"#).unwrap();
    let StrategyConfig::Winnow(opts) = &cfg else {
        panic!("expected winnow strategy");
    };

    let generator = WinnowFingerprint::new().from_text(ESSAY);
    assert_eq!(
        fingerprint_document(&doc, &cfg).unwrap(),
        generator.generate(Some(opts)).unwrap()
    );
}

#[test]
fn config_errors_surface_as_config_kind() {
    let dir = tempdir().unwrap();
    let doc_path = dir.path().join("essay.txt");
    fs::write(&doc_path, ESSAY).unwrap();
    let cfg_path = dir.path().join("bad.yaml");
    fs::write(&cfg_path, "version: \"1.0\"\nwinnow:\n  threshold: 0\n").unwrap();

    assert!(matches!(
        fingerprint_file_with_config(&doc_path, &cfg_path),
        Err(FingerprintError::Config(_))
    ));
}

#[test]
fn multibyte_text_positions_count_characters() {
    let fp = WinnowFingerprint::new().from_text("مرحبا، كيف حالك؟ مرحبا بالعالم");
    let fingerprint = fp.fingerprint(None).unwrap();
    let len = fp.document().unwrap().sanitized_len();
    assert!(fingerprint.positions().all(|p| p + 10 <= len));
}
