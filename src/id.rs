//! Record id generation.
//!
//! Ids combine the save time in milliseconds with random entropy so that
//! rapid writes from independent clients cannot collide the way bare
//! wall-clock ids do.

use rand::Rng;

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix appended to every record id.
const RANDOM_SUFFIX_LEN: usize = 4;

/// Generate a new record id in the format: `TTTTTTTT-XXXX`
/// where TTTTTTTT is the UTC save time in milliseconds encoded as base36
/// and XXXX is a random base36 suffix.
pub fn generate_record_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    format!(
        "{}-{}",
        format_base36(millis),
        random_base36(RANDOM_SUFFIX_LEN)
    )
}

/// Format a number as base36.
fn format_base36(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut result = Vec::new();
    let mut num = n;

    while num > 0 {
        let digit = (num % 36) as usize;
        result.push(BASE36_CHARS[digit] as char);
        num /= 36;
    }

    result.reverse();
    result.into_iter().collect()
}

/// Generate a random base36 string of the given length.
fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36_CHARS[rng.gen_range(0..36)] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_base36() {
        assert_eq!(format_base36(0), "0");
        assert_eq!(format_base36(35), "z");
        assert_eq!(format_base36(36), "10");
        assert_eq!(format_base36(36 * 36), "100");
    }

    #[test]
    fn test_random_base36_length_and_alphabet() {
        let s = random_base36(8);
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_record_id_shape() {
        let id = generate_record_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 2);
        assert!(!parts[0].is_empty());
        assert_eq!(parts[1].len(), RANDOM_SUFFIX_LEN);
    }

    #[test]
    fn test_generated_ids_are_unique_under_rapid_calls() {
        let ids: HashSet<String> = (0..200).map(|_| generate_record_id()).collect();
        assert_eq!(ids.len(), 200);
    }
}
