use rand::SeedableRng;

pub use rand_chacha::ChaCha8Rng as SeededRng;

pub fn new_rng(seed: u32) -> SeededRng {
    SeededRng::seed_from_u64(seed as u64)
}
