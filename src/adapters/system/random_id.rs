use rand::Rng;

use crate::core::traits::sources::IdGenerator;

/// Bytes of randomness per id. 48 bits keeps ids short (12 hex chars)
/// while the chance of any collision among 10,000 ids stays below 1e-6.
const ID_BYTES: usize = 6;

/// Generates random lowercase hex ids from the thread-local RNG.
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let bytes: [u8; ID_BYTES] = rand::thread_rng().r#gen();
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
