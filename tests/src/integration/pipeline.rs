//! # Pipeline Integration Flows
//!
//! The full seal choreography over a real record directory:
//!
//! 1. **freeze**: DRAFT records lock to FROZEN
//! 2. **build**: PASS records aggregate into the canonical manifest
//! 3. **sign**: the file-backed identity signs the exact manifest bytes
//! 4. **verify**: the detached signature checks out under the public key
//!
//! Stages run against files the way the CLI drives them, so these tests
//! cover the adapters and the service layer together.

#[cfg(test)]
mod tests {
    use seal_pipeline::service;
    use seal_pipeline::{FileKeyStore, FsRecordSource, KeyCustody, RejectReason};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// One registry checkout: record directory, artifact paths, identity path.
    struct BatchFixture {
        root: TempDir,
        records_dir: PathBuf,
        manifest_path: PathBuf,
        signature_path: PathBuf,
        key_path: PathBuf,
    }

    impl BatchFixture {
        fn new() -> Self {
            let root = TempDir::new().unwrap();
            let records_dir = root.path().join("machine");
            let artifacts = root.path().join("registry").join("manifests");
            fs::create_dir_all(&records_dir).unwrap();
            fs::create_dir_all(&artifacts).unwrap();

            Self {
                records_dir,
                manifest_path: artifacts.join("batch_manifest.json"),
                signature_path: artifacts.join("batch_manifest.sig"),
                key_path: root.path().join("private_key.hex"),
                root,
            }
        }

        fn write_record(&self, file: &str, canonical_id: &str, status: &str, payload: &str) {
            let contents = format!(
                r#"{{"canonical_id": "{}", "status": "{}", "payload": "{}"}}"#,
                canonical_id, status, payload
            );
            fs::write(self.records_dir.join(file), contents).unwrap();
        }

        fn source(&self) -> FsRecordSource {
            FsRecordSource::new(&self.records_dir)
        }

        /// build + persist + sign; returns the signer's public key hex.
        fn seal(&self, batch_id: &str) -> String {
            let manifest = service::build_batch_manifest(&self.source(), batch_id).unwrap();
            let bytes = manifest.canonical_bytes().unwrap();
            fs::write(&self.manifest_path, &bytes).unwrap();

            let keystore = FileKeyStore::load_or_create(&self.key_path).unwrap();
            let signature = service::sign_manifest(&keystore, &bytes).unwrap();
            fs::write(&self.signature_path, signature.to_hex()).unwrap();

            keystore.public_key_hex()
        }

        fn verify(&self, public_key_hex: &str) -> Result<(), RejectReason> {
            service::verify_manifest_files(
                public_key_hex,
                &self.manifest_path,
                &self.signature_path,
            )
        }
    }

    // =========================================================================
    // SCENARIO: A(PASS), B(PASS), C(DRAFT)
    // =========================================================================

    #[test]
    fn test_three_record_scenario() {
        let fixture = BatchFixture::new();
        // Written out of id order on purpose
        fixture.write_record("b.json", "REC-B", "PASS", "second");
        fixture.write_record("c.json", "REC-C", "DRAFT", "unready");
        fixture.write_record("a.json", "REC-A", "PASS", "first");

        let public_key = fixture.seal("BATCH-ABC");

        // Manifest holds exactly A and B, in canonical order
        let manifest: serde_json::Value =
            serde_json::from_slice(&fs::read(&fixture.manifest_path).unwrap()).unwrap();
        let ids: Vec<&str> = manifest["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["canonical_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["REC-A", "REC-B"]);
        assert_eq!(manifest["meta"]["type"], "CANONSEAL_BATCH_MANIFEST");
        assert_eq!(manifest["meta"]["batch_id"], "BATCH-ABC");

        // Matching key accepts
        assert_eq!(fixture.verify(&public_key), Ok(()));

        // A different but well-formed key is a cryptographic rejection
        let other = seal_crypto::Ed25519KeyPair::from_seed([0xC4u8; 32]);
        assert_eq!(
            fixture.verify(&other.public_key().to_hex()),
            Err(RejectReason::BadSignature)
        );
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let fixture = BatchFixture::new();
        fixture.write_record("x.json", "REC-X", "PASS", "stable");
        fixture.write_record("y.json", "REC-Y", "PASS", "stable too");

        let first = service::build_batch_manifest(&fixture.source(), "BATCH-1")
            .unwrap()
            .canonical_bytes()
            .unwrap();
        let second = service::build_batch_manifest(&fixture.source(), "BATCH-1")
            .unwrap()
            .canonical_bytes()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_batch_round_trip() {
        let fixture = BatchFixture::new();

        let public_key = fixture.seal("BATCH-EMPTY");
        assert_eq!(fixture.verify(&public_key), Ok(()));

        let manifest: serde_json::Value =
            serde_json::from_slice(&fs::read(&fixture.manifest_path).unwrap()).unwrap();
        assert!(manifest["items"].as_array().unwrap().is_empty());
        assert_eq!(
            manifest["aggregate_digest"],
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_freeze_then_build_choreography() {
        let fixture = BatchFixture::new();
        fixture.write_record("a.json", "REC-A", "PASS", "done");
        fixture.write_record("c.json", "REC-C", "DRAFT", "pending");

        // Freeze locks the draft but does not make it eligible
        let outcome = service::freeze_records(&fixture.source()).unwrap();
        assert_eq!(outcome.frozen.len(), 1);

        let manifest = service::build_batch_manifest(&fixture.source(), "BATCH-1").unwrap();
        let ids: Vec<&str> = manifest
            .items
            .iter()
            .map(|item| item.canonical_id.as_str())
            .collect();
        assert_eq!(ids, vec!["REC-A"]);

        // Only once review promotes the record does it enter the manifest
        fixture.write_record("c.json", "REC-C", "PASS", "pending");
        let manifest = service::build_batch_manifest(&fixture.source(), "BATCH-1").unwrap();
        assert_eq!(manifest.items.len(), 2);
    }

    #[test]
    fn test_record_edit_changes_aggregate() {
        let fixture = BatchFixture::new();
        fixture.write_record("a.json", "REC-A", "PASS", "version one");
        let before = service::build_batch_manifest(&fixture.source(), "BATCH-1").unwrap();

        fixture.write_record("a.json", "REC-A", "PASS", "version two");
        let after = service::build_batch_manifest(&fixture.source(), "BATCH-1").unwrap();

        assert_ne!(before.aggregate_digest, after.aggregate_digest);
    }

    #[test]
    fn test_missing_signature_file_is_missing_artifact() {
        let fixture = BatchFixture::new();
        let public_key = fixture.seal("BATCH-1");
        fs::remove_file(&fixture.signature_path).unwrap();

        assert_eq!(
            fixture.verify(&public_key),
            Err(RejectReason::MissingArtifact {
                path: fixture.signature_path.clone()
            })
        );
    }

    #[test]
    fn test_signature_file_is_bare_hex() {
        let fixture = BatchFixture::new();
        fixture.write_record("a.json", "REC-A", "PASS", "payload");
        fixture.seal("BATCH-1");

        let stored = fs::read_to_string(&fixture.signature_path).unwrap();
        assert_eq!(stored.len(), 128);
        assert!(hex::decode(&stored).is_ok());
    }

    #[test]
    fn test_signing_key_created_on_first_seal() {
        let fixture = BatchFixture::new();
        assert!(!fixture.key_path.exists());

        fixture.seal("BATCH-1");

        assert!(fixture.key_path.exists());
        // Key file outlives the batch; resealing reuses the identity
        let keystore = FileKeyStore::load_or_create(&fixture.key_path).unwrap();
        assert!(keystore.public_key().is_ok());
        assert!(fixture.root.path().join("machine").exists());
    }
}
