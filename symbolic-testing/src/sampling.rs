use rand::Rng;
use rand::distr::Distribution;
use spop_symbolic::VALID_NAME_CHARS;

/// Samples names made only of [`VALID_NAME_CHARS`], with a length uniform in `0..=max_len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidSymbolName {
    pub max_len: usize,
}

impl Default for ValidSymbolName {
    fn default() -> Self {
        Self { max_len: 16 }
    }
}

impl Distribution<String> for ValidSymbolName {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let charset = VALID_NAME_CHARS.as_bytes();
        let len = rng.random_range(0..=self.max_len);
        (0..len)
            .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
            .collect()
    }
}
