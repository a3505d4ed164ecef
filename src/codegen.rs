use rand::Rng;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Base-36, lowercase.
pub const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of short codes for links created without a custom one.
pub trait CodeGenerator: Send {
    fn generate(&self) -> String;
}

/// The default: `generate()` from the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodes;

impl CodeGenerator for RandomCodes {
    fn generate(&self) -> String {
        generate()
    }
}

/// Generate a random short code. Uniqueness is the caller's problem: the
/// manager rejects a collision instead of retrying.
pub fn generate() -> String {
    random_code(CODE_LENGTH)
}

/// Generate a random base-36 string of the given length.
pub fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
