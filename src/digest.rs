use md5::{Digest, Md5};

/// Lowercase hex MD5 of the arguments fed to one hasher in order.
pub fn md5_hex<S: AsRef<[u8]>>(parts: &[S]) -> String {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(md5_hex::<&str>(&[]), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(&["abc"]), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_parts_are_concatenated() {
        assert_eq!(md5_hex(&["a", "bc"]), md5_hex(&["abc"]));
    }
}
