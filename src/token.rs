use rand::RngCore;

/// Length of a share token in hex characters (12 random bytes).
pub const SHARE_TOKEN_LEN: usize = 24;

/// Generate an opaque share token for an event: 12 cryptographically random
/// bytes, hex-encoded. A function of no other field; uniqueness is backed by
/// the UNIQUE constraint on events.unique_url.
pub fn generate_share_token() -> String {
    let mut bytes = [0u8; SHARE_TOKEN_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().fold(
        String::with_capacity(SHARE_TOKEN_LEN),
        |mut out, b| {
            use std::fmt::Write;
            let _ = write!(out, "{:02x}", b);
            out
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_24_hex_chars() {
        let token = generate_share_token();
        assert_eq!(token.len(), SHARE_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_do_not_repeat_across_generates() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(generate_share_token()));
        }
    }
}
