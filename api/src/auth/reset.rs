//! Password-reset codes: 6 digits, 10-minute expiry, single use.
//!
//! Codes are generated and checked server-side; in lieu of a mail provider the code
//! is written to the server log for the operator to relay.

use chrono::Duration;

/// How long a reset code stays valid.
pub fn code_ttl() -> Duration {
    Duration::minutes(10)
}

/// Generate a random 6-digit code, zero-padded.
pub fn generate_code() -> String {
    use rand::Rng;
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn ttl_is_ten_minutes() {
        assert_eq!(code_ttl(), Duration::minutes(10));
    }
}
