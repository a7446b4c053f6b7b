//! Runtime configuration and environment loading.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use arena_core::GameConfig;

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::repository::FileFavoritesRepository;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub catalog_base_url: String,
    pub favorites_path: PathBuf,
    /// Pause between computing the battle and revealing the winner.
    pub reveal_delay: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Session seed; drawn from the OS RNG when absent.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(2000);
    pub const MIN_REVEAL_DELAY: Duration = Duration::from_millis(1);

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CATALOG_URL` - Catalog service root (default: public API)
    /// - `ARENA_FAVORITES_PATH` - Favorites file (default: platform data dir)
    /// - `ARENA_REVEAL_DELAY_MS` - Battle display delay (default: 2000)
    /// - `ARENA_PAGE_COUNT` - Pages to draw round pools from (default: 42)
    /// - `ARENA_SEED` - Fixed session seed (default: random)
    /// - `ARENA_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `ARENA_EVENT_BUFFER` - Event queue size per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("ARENA_CATALOG_URL")
            && !url.trim().is_empty()
        {
            config.catalog_base_url = url.trim().to_string();
        }

        if let Some(path) = env::var_os("ARENA_FAVORITES_PATH") {
            config.favorites_path = PathBuf::from(path);
        }

        if let Some(delay_ms) = read_env::<u64>("ARENA_REVEAL_DELAY_MS") {
            config = config.with_reveal_delay(Duration::from_millis(delay_ms));
        }

        if let Some(page_count) = read_env::<u32>("ARENA_PAGE_COUNT") {
            config.game_config = config.game_config.with_page_count(page_count);
        }

        config.seed = read_env::<u64>("ARENA_SEED");

        if let Some(capacity) = read_env::<usize>("ARENA_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Set the reveal delay, clamped to at least one millisecond.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay.max(Self::MIN_REVEAL_DELAY);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            favorites_path: default_favorites_path(),
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            command_buffer_size: 32,
            event_buffer_size: 100,
            seed: None,
        }
    }
}

/// Platform data directory, falling back to the working directory.
///
/// - macOS: `~/Library/Application Support/arena/favorites.json`
/// - Linux: `~/.local/share/arena/favorites.json`
/// - Windows: `%APPDATA%\arena\data\favorites.json`
pub fn default_favorites_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(FileFavoritesRepository::FILE_NAME)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
