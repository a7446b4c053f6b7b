/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of characters drawn into each round's pool.
    pub pool_size: usize,
    /// Catalog pages eligible for the random pool draw (`1..=page_count`).
    pub page_count: u32,
    /// Characters with `total` strictly below this are "weak" for the opponent.
    pub weak_threshold: u32,
    /// Exclusive upper bound of the player's luck draw.
    pub luck_range: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Members per team, for both the player and the scripted opponent.
    pub const TEAM_SIZE: usize = 3;
    /// Weak picks the opponent takes before filling uniformly.
    pub const OPPONENT_WEAK_PICKS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_POOL_SIZE: usize = 5;
    pub const DEFAULT_PAGE_COUNT: u32 = 42;
    pub const DEFAULT_WEAK_THRESHOLD: u32 = 300;
    pub const DEFAULT_LUCK_RANGE: u32 = 50;

    pub fn new() -> Self {
        Self {
            pool_size: Self::DEFAULT_POOL_SIZE,
            page_count: Self::DEFAULT_PAGE_COUNT,
            weak_threshold: Self::DEFAULT_WEAK_THRESHOLD,
            luck_range: Self::DEFAULT_LUCK_RANGE,
        }
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count.max(1);
        self
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(Self::TEAM_SIZE);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
