use md5::{Digest, Md5};

/// Hashes a password the way it is stored in the `user` table.
///
/// Surrounding whitespace is trimmed before hashing, the result is the lowercase
/// hex MD5 digest.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Md5::digest(password.trim().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_to_lowercase_hex_md5() {
        assert_eq!(
            hash_password("password"),
            "5f4dcc3b5aa765d61d8327deb882cf99"
        );
    }

    #[test]
    fn trims_before_hashing() {
        assert_eq!(hash_password("  123456 \n"), hash_password("123456"));
        assert_eq!(hash_password("123456"), "e10adc3949ba59abbe56e057f20f883e");
    }
}
