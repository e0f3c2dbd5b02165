use rand::{rngs::StdRng, Rng, SeedableRng};

/// Picks notification titles from fixed pools.
///
/// The random source is injected so tests can use a fixed seed and get a
/// reproducible sequence of titles.
#[derive(Debug)]
pub struct TitlePicker {
    rng: StdRng,
}

impl TitlePicker {
    /// Picker seeded from the operating system, used in production.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Picker with a fixed seed.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses one title uniformly at random, empty for an empty pool.
    pub fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        if pool.is_empty() {
            return "";
        }
        pool[self.rng.random_range(0..pool.len())]
    }
}
