use rand::Rng;

/// Join code alphabet with confusable characters (0/O, 1/I) removed.
pub static JOIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a team join code.
pub const JOIN_CODE_LENGTH: usize = 6;

/// Generates a random join code.
///
/// Uniqueness is handled by the caller via rejection sampling against
/// existing codes; the unique column index is the final backstop.
pub fn generate_join_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..JOIN_CODE_LENGTH)
        .map(|_| JOIN_CODE_ALPHABET[rng.random_range(0..JOIN_CODE_ALPHABET.len())] as char)
        .collect()
}
