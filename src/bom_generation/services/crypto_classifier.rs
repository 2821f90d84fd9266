use crate::bom_generation::domain::{CipherMode, CryptoFunction, Primitive};

/// Substring to key size, first match wins.
const KEY_SIZE_PATTERNS: &[(&str, u32)] = &[
    ("aes-256", 256),
    ("aes-192", 192),
    ("aes-128", 128),
    ("aes256", 256),
    ("aes192", 192),
    ("aes128", 128),
    ("rsa-4096", 4096),
    ("rsa-3072", 3072),
    ("rsa-2048", 2048),
    ("rsa-1024", 1024),
    ("rsa4096", 4096),
    ("rsa3072", 3072),
    ("rsa2048", 2048),
    ("rsa1024", 1024),
    ("sha3-256", 256),
    ("sha3-384", 384),
    ("sha3-512", 512),
    ("sha-256", 256),
    ("sha-384", 384),
    ("sha-512", 512),
    ("sha256", 256),
    ("sha384", 384),
    ("sha512", 512),
    ("p-256", 256),
    ("p-384", 384),
    ("p-521", 521),
    ("secp256", 256),
    ("secp384", 384),
    ("secp521", 521),
    ("chacha20", 256),
];

/// Canonical `algorithm[-mode][-size]` key to OID.
const ALGORITHM_OIDS: &[(&str, &str)] = &[
    ("aes-ecb-128", "2.16.840.1.101.3.4.1.1"),
    ("aes-cbc-128", "2.16.840.1.101.3.4.1.2"),
    ("aes-gcm-128", "2.16.840.1.101.3.4.1.6"),
    ("aes-ccm-128", "2.16.840.1.101.3.4.1.7"),
    ("aes-ecb-192", "2.16.840.1.101.3.4.1.21"),
    ("aes-cbc-192", "2.16.840.1.101.3.4.1.22"),
    ("aes-gcm-192", "2.16.840.1.101.3.4.1.26"),
    ("aes-ccm-192", "2.16.840.1.101.3.4.1.27"),
    ("aes-ecb-256", "2.16.840.1.101.3.4.1.41"),
    ("aes-cbc-256", "2.16.840.1.101.3.4.1.42"),
    ("aes-gcm-256", "2.16.840.1.101.3.4.1.46"),
    ("aes-ccm-256", "2.16.840.1.101.3.4.1.47"),
    ("sha-256", "2.16.840.1.101.3.4.2.1"),
    ("sha-384", "2.16.840.1.101.3.4.2.2"),
    ("sha-512", "2.16.840.1.101.3.4.2.3"),
    ("sha-224", "2.16.840.1.101.3.4.2.4"),
    ("sha256", "2.16.840.1.101.3.4.2.1"),
    ("sha384", "2.16.840.1.101.3.4.2.2"),
    ("sha512", "2.16.840.1.101.3.4.2.3"),
    ("sha3-256", "2.16.840.1.101.3.4.2.8"),
    ("sha3-384", "2.16.840.1.101.3.4.2.9"),
    ("sha3-512", "2.16.840.1.101.3.4.2.10"),
    ("sha-1", "1.3.14.3.2.26"),
    ("sha1", "1.3.14.3.2.26"),
    ("md5", "1.2.840.113549.2.5"),
    ("hmac-sha256", "1.2.840.113549.2.9"),
    ("rsa", "1.2.840.113549.1.1.1"),
    ("ed25519", "1.3.101.112"),
    ("x25519", "1.3.101.110"),
    ("3des", "1.2.840.113549.3.7"),
    ("des-ede3-cbc", "1.2.840.113549.3.7"),
    ("chacha20-poly1305", "1.2.840.113549.1.9.16.3.18"),
];

/// TLS versions recognised in finding text, newest first.
const TLS_VERSIONS: [&str; 4] = ["1.3", "1.2", "1.1", "1.0"];

const TRIPLE_DES_MARKERS: [&str; 6] = ["3des", "triple", "des-ede", "desede", "des3", "tdea"];

/// CryptoClassifier service for free-text algorithm names
///
/// Every function here is total: unrecognised input degrades to the most
/// generic answer (`other`, no functions, no OID, `unknown` version)
/// instead of failing. All rules are case-insensitive and treat `_` and
/// spaces the same as `-`.
pub struct CryptoClassifier;

impl CryptoClassifier {
    /// Infers the primitive of an algorithm
    ///
    /// Rules are tried in order and the first match wins:
    /// 1. AE mode markers: gcm, ccm, chacha20-poly1305
    /// 2. Hashes: sha*, md5*, md4* prefixes, blake, ripemd
    /// 3. MACs: hmac* prefix, poly1305
    /// 4. Signatures: rsa, ecdsa, ed25519, dsa, dilithium, ml-dsa
    /// 5. KEMs: kyber, ml-kem
    /// 6. KDFs: hkdf, pbkdf, scrypt, argon
    /// 7. Bare ciphers: aes, des, blowfish, rc4
    ///
    /// # Examples
    /// ```
    /// use zero_bom::bom_generation::services::CryptoClassifier;
    /// use zero_bom::bom_generation::domain::Primitive;
    ///
    /// assert_eq!(CryptoClassifier::classify_primitive("AES-GCM"), Primitive::Ae);
    /// assert_eq!(CryptoClassifier::classify_primitive("SHA-256"), Primitive::Hash);
    /// assert_eq!(CryptoClassifier::classify_primitive("unknownalgo123"), Primitive::Other);
    /// ```
    pub fn classify_primitive(algorithm: &str) -> Primitive {
        let name = normalize(algorithm);
        let contains_any = |markers: &[&str]| markers.iter().any(|m| name.contains(m));

        if contains_any(&["gcm", "ccm", "chacha20-poly1305"]) {
            Primitive::Ae
        } else if ["sha", "md5", "md4"].iter().any(|p| name.starts_with(p))
            || contains_any(&["blake", "ripemd"])
        {
            Primitive::Hash
        } else if name.starts_with("hmac") || name.contains("poly1305") {
            Primitive::Mac
        } else if contains_any(&["rsa", "ecdsa", "ed25519", "dsa", "dilithium", "ml-dsa"]) {
            Primitive::Dsa
        } else if contains_any(&["kyber", "ml-kem"]) {
            Primitive::Kem
        } else if contains_any(&["hkdf", "pbkdf", "scrypt", "argon"]) {
            Primitive::Kdf
        } else if contains_any(&["aes", "des", "blowfish", "rc4"]) {
            Primitive::Ae
        } else {
            Primitive::Other
        }
    }

    /// CycloneDX `cryptoFunctions` of a primitive
    pub fn derive_functions(primitive: Primitive) -> Vec<CryptoFunction> {
        use CryptoFunction::*;

        match primitive {
            Primitive::Ae | Primitive::Pke => vec![Keygen, Encrypt, Decrypt],
            Primitive::Dsa => vec![Keygen, Sign, Verify],
            Primitive::Kem => vec![Keygen, Encapsulate, Decapsulate],
            Primitive::Mac => vec![Keygen, Tag, Verify],
            Primitive::Hash | Primitive::Xof => vec![Digest],
            Primitive::Kdf => vec![Keyderive],
            Primitive::Other => Vec::new(),
        }
    }

    /// Estimates classical security strength in bits
    ///
    /// Broken algorithms (md5, md4, rc4, rc2, single DES) score 0. Sized
    /// families are banded by key size; anything unrecognised is credited
    /// with half its key size. This is an estimate for triage, not a
    /// cryptographic assessment.
    ///
    /// # Arguments
    /// * `algorithm` - Free-text algorithm name
    /// * `key_size` - Key size in bits, 0 when unknown
    pub fn estimate_security_level(algorithm: &str, key_size: u32) -> u32 {
        let name = normalize(algorithm);
        let contains_any = |markers: &[&str]| markers.iter().any(|m| name.contains(m));
        let triple_des = contains_any(&TRIPLE_DES_MARKERS);

        if contains_any(&["md5", "md4", "rc4", "rc2"]) || (name.contains("des") && !triple_des) {
            return 0;
        }
        if contains_any(&["sha1", "sha-1"]) {
            return 80;
        }
        if contains_any(&["sha256", "sha-256", "sha3-256"]) {
            return 128;
        }
        if contains_any(&["sha384", "sha-384", "sha3-384"]) {
            return 192;
        }
        if contains_any(&["sha512", "sha-512", "sha3-512"]) {
            return 256;
        }
        if contains_any(&["aes", "chacha20"]) {
            match key_size {
                256.. => return 256,
                192.. => return 192,
                128.. => return 128,
                _ => {}
            }
        }
        if triple_des {
            return 112;
        }
        if name.contains("rsa") {
            return match key_size {
                4096.. => 140,
                3072.. => 128,
                2048.. => 112,
                1024.. => 80,
                _ => 0,
            };
        }
        if contains_any(&["ecdsa", "ecdh", "ecc"]) {
            match key_size {
                521.. => return 256,
                384.. => return 192,
                256.. => return 128,
                _ => {}
            }
        }
        if name.contains("ed25519") {
            return 128;
        }
        key_size / 2
    }

    /// Infers a key size from the algorithm name, 0 when unknown
    ///
    /// # Examples
    /// ```
    /// use zero_bom::bom_generation::services::CryptoClassifier;
    ///
    /// assert_eq!(CryptoClassifier::extract_key_size("RSA-2048"), 2048);
    /// assert_eq!(CryptoClassifier::extract_key_size("AES_256_GCM"), 256);
    /// assert_eq!(CryptoClassifier::extract_key_size("blowfish"), 0);
    /// ```
    pub fn extract_key_size(algorithm: &str) -> u32 {
        let name = normalize(algorithm);
        KEY_SIZE_PATTERNS
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map(|(_, size)| *size)
            .unwrap_or(0)
    }

    /// Looks up the OID of an algorithm
    ///
    /// The lookup key is `<algorithm>[-<mode>][-<size>]`. Mode and size
    /// come from the arguments, or from the algorithm text when the
    /// arguments leave them out, so "AES-256-GCM" and ("AES", GCM, 256)
    /// resolve to the same entry. When the full key is unknown the bare
    /// algorithm name is tried.
    ///
    /// # Returns
    /// The dotted OID, or None when the algorithm is not in the table
    pub fn lookup_oid(algorithm: &str, mode: Option<CipherMode>, key_size: u32) -> Option<&'static str> {
        let name = normalize(algorithm);
        let mut base = Vec::new();
        let mut text_mode = None;
        let mut text_size = None;

        for token in name.split('-').filter(|t| !t.is_empty()) {
            if let Some(found) = CipherMode::DETECTABLE.iter().find(|m| m.as_str() == token) {
                text_mode.get_or_insert(*found);
            } else if token.chars().all(|c| c.is_ascii_digit()) {
                text_size.get_or_insert(token);
            } else {
                base.push(token);
            }
        }

        let base = base.join("-");
        if base.is_empty() {
            return None;
        }

        let mode = mode.or(text_mode).map(|m| m.as_str());
        let size = if key_size > 0 {
            Some(key_size.to_string())
        } else {
            text_size.map(str::to_string)
        };

        let mut key = base.clone();
        if let Some(mode) = mode {
            key = format!("{}-{}", key, mode);
        }
        if let Some(size) = size {
            key = format!("{}-{}", key, size);
        }

        find_oid(&key).or_else(|| find_oid(&base))
    }

    /// Detects a cipher mode, searching the algorithm before the description
    ///
    /// The algorithm is matched by substring ("AES256GCM"). The description
    /// is matched by whole word so prose like "electronic" is not read as a
    /// mode.
    pub fn extract_mode(algorithm: &str, description: &str) -> Option<CipherMode> {
        let algorithm = algorithm.to_lowercase();
        if let Some(mode) = CipherMode::DETECTABLE
            .iter()
            .find(|m| algorithm.contains(m.as_str()))
        {
            return Some(*mode);
        }

        let description = description.to_lowercase();
        let words: Vec<&str> = description
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        CipherMode::DETECTABLE
            .iter()
            .find(|m| words.contains(&m.as_str()))
            .copied()
    }

    /// Detects the protocol version named by a TLS finding
    ///
    /// # Returns
    /// "1.3", "1.2", "1.1", "1.0", "SSLv3", "SSLv2" or "unknown"
    pub fn extract_tls_version(finding_type: &str, description: &str) -> &'static str {
        let text = format!("{} {}", finding_type, description).to_lowercase();

        for version in TLS_VERSIONS {
            let underscored = version.replace('.', "_");
            let patterns = [
                format!("tls{}", version),
                format!("tls {}", version),
                format!("tlsv{}", version),
                format!("tls v{}", version),
                format!("tls_{}", underscored),
                format!("tls{}", underscored),
                format!("tlsv{}", underscored),
                format!("tls_v{}", underscored),
            ];
            if patterns.iter().any(|p| text.contains(p.as_str())) {
                return version;
            }
        }

        if ["sslv3", "ssl3", "ssl 3", "ssl_v3", "ssl_3"]
            .iter()
            .any(|p| text.contains(p))
        {
            return "SSLv3";
        }
        if ["sslv2", "ssl2", "ssl 2", "ssl_v2", "ssl_2"]
            .iter()
            .any(|p| text.contains(p))
        {
            return "SSLv2";
        }
        "unknown"
    }
}

fn normalize(algorithm: &str) -> String {
    algorithm
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

fn find_oid(key: &str) -> Option<&'static str> {
    ALGORITHM_OIDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, oid)| *oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_primitive_ae_modes_before_ciphers() {
        assert_eq!(CryptoClassifier::classify_primitive("AES-GCM"), Primitive::Ae);
        assert_eq!(CryptoClassifier::classify_primitive("aes_128_ccm"), Primitive::Ae);
        assert_eq!(
            CryptoClassifier::classify_primitive("ChaCha20-Poly1305"),
            Primitive::Ae
        );
    }

    #[test]
    fn test_classify_primitive_hashes() {
        assert_eq!(CryptoClassifier::classify_primitive("SHA-256"), Primitive::Hash);
        assert_eq!(CryptoClassifier::classify_primitive("sha3-512"), Primitive::Hash);
        assert_eq!(CryptoClassifier::classify_primitive("MD5"), Primitive::Hash);
        assert_eq!(CryptoClassifier::classify_primitive("md4"), Primitive::Hash);
        assert_eq!(CryptoClassifier::classify_primitive("BLAKE2b"), Primitive::Hash);
        assert_eq!(CryptoClassifier::classify_primitive("RIPEMD-160"), Primitive::Hash);
    }

    #[test]
    fn test_classify_primitive_macs() {
        assert_eq!(CryptoClassifier::classify_primitive("HMAC-SHA256"), Primitive::Mac);
        assert_eq!(CryptoClassifier::classify_primitive("Poly1305"), Primitive::Mac);
    }

    #[test]
    fn test_classify_primitive_signatures() {
        assert_eq!(CryptoClassifier::classify_primitive("RSA-2048"), Primitive::Dsa);
        assert_eq!(CryptoClassifier::classify_primitive("ECDSA"), Primitive::Dsa);
        assert_eq!(CryptoClassifier::classify_primitive("Ed25519"), Primitive::Dsa);
        assert_eq!(CryptoClassifier::classify_primitive("DSA"), Primitive::Dsa);
        assert_eq!(CryptoClassifier::classify_primitive("Dilithium3"), Primitive::Dsa);
        assert_eq!(CryptoClassifier::classify_primitive("ML-DSA-65"), Primitive::Dsa);
    }

    #[test]
    fn test_classify_primitive_kem_and_kdf() {
        assert_eq!(CryptoClassifier::classify_primitive("Kyber768"), Primitive::Kem);
        assert_eq!(CryptoClassifier::classify_primitive("ML-KEM-768"), Primitive::Kem);
        assert_eq!(CryptoClassifier::classify_primitive("HKDF"), Primitive::Kdf);
        assert_eq!(CryptoClassifier::classify_primitive("PBKDF2"), Primitive::Kdf);
        assert_eq!(CryptoClassifier::classify_primitive("scrypt"), Primitive::Kdf);
        assert_eq!(CryptoClassifier::classify_primitive("Argon2id"), Primitive::Kdf);
    }

    #[test]
    fn test_classify_primitive_bare_ciphers() {
        assert_eq!(CryptoClassifier::classify_primitive("AES"), Primitive::Ae);
        assert_eq!(CryptoClassifier::classify_primitive("DES"), Primitive::Ae);
        assert_eq!(CryptoClassifier::classify_primitive("3DES"), Primitive::Ae);
        assert_eq!(CryptoClassifier::classify_primitive("Blowfish"), Primitive::Ae);
        assert_eq!(CryptoClassifier::classify_primitive("RC4"), Primitive::Ae);
    }

    #[test]
    fn test_classify_primitive_is_total() {
        assert_eq!(CryptoClassifier::classify_primitive(""), Primitive::Other);
        assert_eq!(CryptoClassifier::classify_primitive("unknownalgo123"), Primitive::Other);
        assert_eq!(CryptoClassifier::classify_primitive("🔐 ünïcødé"), Primitive::Other);
    }

    #[test]
    fn test_derive_functions() {
        use CryptoFunction::*;

        assert_eq!(
            CryptoClassifier::derive_functions(Primitive::Ae),
            vec![Keygen, Encrypt, Decrypt]
        );
        assert_eq!(
            CryptoClassifier::derive_functions(Primitive::Pke),
            vec![Keygen, Encrypt, Decrypt]
        );
        assert_eq!(
            CryptoClassifier::derive_functions(Primitive::Dsa),
            vec![Keygen, Sign, Verify]
        );
        assert_eq!(
            CryptoClassifier::derive_functions(Primitive::Kem),
            vec![Keygen, Encapsulate, Decapsulate]
        );
        assert_eq!(
            CryptoClassifier::derive_functions(Primitive::Mac),
            vec![Keygen, Tag, Verify]
        );
        assert_eq!(CryptoClassifier::derive_functions(Primitive::Hash), vec![Digest]);
        assert_eq!(CryptoClassifier::derive_functions(Primitive::Xof), vec![Digest]);
        assert_eq!(CryptoClassifier::derive_functions(Primitive::Kdf), vec![Keyderive]);
        assert!(CryptoClassifier::derive_functions(Primitive::Other).is_empty());
    }

    #[test]
    fn test_security_level_broken_algorithms() {
        assert_eq!(CryptoClassifier::estimate_security_level("MD5", 128), 0);
        assert_eq!(CryptoClassifier::estimate_security_level("md4", 0), 0);
        assert_eq!(CryptoClassifier::estimate_security_level("RC4", 128), 0);
        assert_eq!(CryptoClassifier::estimate_security_level("rc2", 64), 0);
        assert_eq!(CryptoClassifier::estimate_security_level("DES", 56), 0);
    }

    #[test]
    fn test_security_level_triple_des_is_not_single_des() {
        assert_eq!(CryptoClassifier::estimate_security_level("3DES", 168), 112);
        assert_eq!(CryptoClassifier::estimate_security_level("Triple-DES", 168), 112);
        assert_eq!(CryptoClassifier::estimate_security_level("DES-EDE3-CBC", 0), 112);
        assert_eq!(CryptoClassifier::estimate_security_level("DESede", 0), 112);
    }

    #[test]
    fn test_security_level_hashes() {
        assert_eq!(CryptoClassifier::estimate_security_level("SHA-1", 0), 80);
        assert_eq!(CryptoClassifier::estimate_security_level("sha1", 0), 80);
        assert_eq!(CryptoClassifier::estimate_security_level("SHA-256", 256), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("SHA3-256", 0), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("sha384", 0), 192);
        assert_eq!(CryptoClassifier::estimate_security_level("SHA-512", 0), 256);
    }

    #[test]
    fn test_security_level_symmetric_bands() {
        assert_eq!(CryptoClassifier::estimate_security_level("AES", 256), 256);
        assert_eq!(CryptoClassifier::estimate_security_level("AES", 192), 192);
        assert_eq!(CryptoClassifier::estimate_security_level("AES-128-GCM", 128), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("ChaCha20", 256), 256);
        // Below the smallest band falls through to the generic rule
        assert_eq!(CryptoClassifier::estimate_security_level("AES", 0), 0);
    }

    #[test]
    fn test_security_level_rsa_bands() {
        assert_eq!(CryptoClassifier::estimate_security_level("RSA-4096", 4096), 140);
        assert_eq!(CryptoClassifier::estimate_security_level("RSA", 3072), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("RSA-2048", 2048), 112);
        assert_eq!(CryptoClassifier::estimate_security_level("RSA", 1024), 80);
        assert_eq!(CryptoClassifier::estimate_security_level("RSA", 512), 0);
    }

    #[test]
    fn test_security_level_ecc_bands() {
        assert_eq!(CryptoClassifier::estimate_security_level("ECDSA", 521), 256);
        assert_eq!(CryptoClassifier::estimate_security_level("ECDH", 384), 192);
        assert_eq!(CryptoClassifier::estimate_security_level("ECDSA-P256", 256), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("ECC", 160), 80);
        assert_eq!(CryptoClassifier::estimate_security_level("Ed25519", 0), 128);
    }

    #[test]
    fn test_security_level_unknown_is_half_key_size() {
        assert_eq!(CryptoClassifier::estimate_security_level("unknownalgo123", 256), 128);
        assert_eq!(CryptoClassifier::estimate_security_level("unknownalgo123", 0), 0);
        assert_eq!(CryptoClassifier::estimate_security_level("", 7), 3);
    }

    #[test]
    fn test_extract_key_size() {
        assert_eq!(CryptoClassifier::extract_key_size("RSA-2048"), 2048);
        assert_eq!(CryptoClassifier::extract_key_size("rsa4096"), 4096);
        assert_eq!(CryptoClassifier::extract_key_size("AES-256-GCM"), 256);
        assert_eq!(CryptoClassifier::extract_key_size("aes_128_cbc"), 128);
        assert_eq!(CryptoClassifier::extract_key_size("AES 192"), 192);
        assert_eq!(CryptoClassifier::extract_key_size("SHA-384"), 384);
        assert_eq!(CryptoClassifier::extract_key_size("sha3-512"), 512);
        assert_eq!(CryptoClassifier::extract_key_size("ECDSA P-384"), 384);
        assert_eq!(CryptoClassifier::extract_key_size("secp256r1"), 256);
        assert_eq!(CryptoClassifier::extract_key_size("AES"), 0);
        assert_eq!(CryptoClassifier::extract_key_size(""), 0);
    }

    #[test]
    fn test_lookup_oid_from_arguments() {
        assert_eq!(
            CryptoClassifier::lookup_oid("AES", Some(CipherMode::Gcm), 256),
            Some("2.16.840.1.101.3.4.1.46")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("aes", Some(CipherMode::Cbc), 128),
            Some("2.16.840.1.101.3.4.1.2")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("SHA-256", None, 256),
            Some("2.16.840.1.101.3.4.2.1")
        );
    }

    #[test]
    fn test_lookup_oid_from_algorithm_text() {
        assert_eq!(
            CryptoClassifier::lookup_oid("AES-256-GCM", None, 0),
            Some("2.16.840.1.101.3.4.1.46")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("aes_192_cbc", None, 0),
            Some("2.16.840.1.101.3.4.1.22")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("SHA3-384", None, 0),
            Some("2.16.840.1.101.3.4.2.9")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("SHA-1", None, 0),
            Some("1.3.14.3.2.26")
        );
    }

    #[test]
    fn test_lookup_oid_falls_back_to_bare_name() {
        assert_eq!(
            CryptoClassifier::lookup_oid("RSA-2048", None, 2048),
            Some("1.2.840.113549.1.1.1")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("Ed25519", None, 0),
            Some("1.3.101.112")
        );
        assert_eq!(
            CryptoClassifier::lookup_oid("ChaCha20-Poly1305", None, 256),
            Some("1.2.840.113549.1.9.16.3.18")
        );
    }

    #[test]
    fn test_lookup_oid_unknown() {
        assert_eq!(CryptoClassifier::lookup_oid("unknownalgo123", None, 0), None);
        assert_eq!(CryptoClassifier::lookup_oid("AES", Some(CipherMode::Ctr), 256), None);
        assert_eq!(CryptoClassifier::lookup_oid("", None, 0), None);
        assert_eq!(CryptoClassifier::lookup_oid("256", None, 0), None);
    }

    #[test]
    fn test_extract_mode_from_algorithm() {
        assert_eq!(
            CryptoClassifier::extract_mode("AES-256-GCM", ""),
            Some(CipherMode::Gcm)
        );
        assert_eq!(
            CryptoClassifier::extract_mode("aes128cbc", "uses GCM"),
            Some(CipherMode::Cbc)
        );
    }

    #[test]
    fn test_extract_mode_from_description() {
        assert_eq!(
            CryptoClassifier::extract_mode("AES", "ECB mode"),
            Some(CipherMode::Ecb)
        );
        assert_eq!(
            CryptoClassifier::extract_mode("AES", "cipher in CTR mode"),
            Some(CipherMode::Ctr)
        );
        assert_eq!(
            CryptoClassifier::extract_mode("AES", "electronic codebook"),
            None
        );
        assert_eq!(CryptoClassifier::extract_mode("", ""), None);
    }

    #[test]
    fn test_extract_tls_version() {
        assert_eq!(
            CryptoClassifier::extract_tls_version("weak_tls_version", "TLS 1.0 is deprecated"),
            "1.0"
        );
        assert_eq!(CryptoClassifier::extract_tls_version("tls1.1", ""), "1.1");
        assert_eq!(CryptoClassifier::extract_tls_version("TLSv1.2", ""), "1.2");
        assert_eq!(CryptoClassifier::extract_tls_version("tls_1_3", ""), "1.3");
        assert_eq!(CryptoClassifier::extract_tls_version("TLS_V1_0", ""), "1.0");
        assert_eq!(CryptoClassifier::extract_tls_version("", "Allows tls v1.1"), "1.1");
    }

    #[test]
    fn test_extract_tls_version_ssl_and_unknown() {
        assert_eq!(CryptoClassifier::extract_tls_version("sslv3_enabled", ""), "SSLv3");
        assert_eq!(CryptoClassifier::extract_tls_version("", "SSL 3 negotiated"), "SSLv3");
        assert_eq!(CryptoClassifier::extract_tls_version("SSLv2", ""), "SSLv2");
        assert_eq!(
            CryptoClassifier::extract_tls_version("insecure_skip_verify", "cert checks disabled"),
            "unknown"
        );
    }
}
