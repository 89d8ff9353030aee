use rand::{rngs::StdRng, RngCore, SeedableRng};

pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for a single trial. Every trial of a run hashes its own index into the
/// run seed so trials never share generator state.
pub fn trial_seed(run_seed: &str, trial: usize) -> [u8; 32] {
    u8s_from_str(&format!("{}_{}", run_seed, trial))
}

/// Fresh hex seed string for runs where the caller did not pin one.
pub fn random_seed_string() -> String {
    let mut bytes = [0u8; 16];
    StdRng::from_entropy().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
