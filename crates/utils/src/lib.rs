use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Creates an alphanumeric random secret with the given length
pub fn create_random_secret(secret_len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}
