use colored::Colorize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Lowercase hex SHA-256 of raw bytes
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hash a file on disk
pub fn hash_file(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(sha256_hex(&content))
}

/// Check a file against a trusted SHA-256 digest.
///
/// No digest means nothing to verify. An unreadable file never matches.
pub fn verify_signature(path: &Path, trusted_hash: Option<&str>) -> bool {
    let Some(trusted) = trusted_hash else {
        return true;
    };

    match hash_file(path) {
        Ok(actual) => actual.eq_ignore_ascii_case(trusted.trim()),
        Err(e) => {
            eprintln!(
                "{}",
                format!("Signature validation failed: {}", e).yellow()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verify_signature() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("LICENSE.md");
        std::fs::write(&path, "abc").unwrap();

        assert!(verify_signature(&path, None));
        assert!(verify_signature(
            &path,
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        ));
        assert!(verify_signature(
            &path,
            Some("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD")
        ));
        assert!(!verify_signature(&path, Some("deadbeef")));
    }

    #[test]
    fn test_missing_file_fails_verification() {
        let temp = TempDir::new().unwrap();
        assert!(!verify_signature(&temp.path().join("missing.md"), Some("00")));
        assert!(verify_signature(&temp.path().join("missing.md"), None));
    }
}
