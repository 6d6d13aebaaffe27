//! Dependency container for the application.
//!
//! The container decides which [`ValueStore`] backs a given location and
//! wires seeds into the agents it creates.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use tracing::info;

use super::config::AgentConfig;
use crate::{
    Result,
    adapters::{FileStore, InMemoryStore},
    learning::LearningAgent,
    ports::ValueStore,
};

#[derive(Debug, Clone)]
enum StoreBackend {
    File,
    /// One shared in-memory store per path
    Memory(Arc<Mutex<HashMap<PathBuf, InMemoryStore>>>),
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use tictactoe_td::app::{AgentConfig, App};
///
/// let app = App::new();
/// let agent = app.create_agent(AgentConfig::new("policy_p1").with_seed(42))?;
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
///
/// ## Testing without touching the file system
///
/// ```
/// use std::path::Path;
/// use tictactoe_td::app::{AgentConfig, App};
///
/// let app = App::for_testing().with_in_memory_stores().build();
/// let agent = app.create_agent(AgentConfig::new("policy_p1"))?;
/// app.save_agent(&agent, Path::new("policy_p1"))?;
/// let restored = app.load_agent(AgentConfig::new("computer"), Path::new("policy_p1"))?;
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct App {
    backend: StoreBackend,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app backed by files, with no default seed.
    pub fn new() -> Self {
        Self {
            backend: StoreBackend::File,
            default_seed: None,
        }
    }

    /// Create a builder for an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Store bound to `path`.
    pub fn store_for(&self, path: &Path) -> Box<dyn ValueStore> {
        match &self.backend {
            StoreBackend::File => Box::new(FileStore::new(path)),
            StoreBackend::Memory(stores) => {
                let mut stores = stores.lock().unwrap_or_else(PoisonError::into_inner);
                Box::new(stores.entry(path.to_path_buf()).or_default().clone())
            }
        }
    }

    /// Create an untrained agent.
    ///
    /// A seed in `config` takes precedence over the app default.
    pub fn create_agent(&self, config: AgentConfig) -> Result<LearningAgent> {
        let mut agent = LearningAgent::new(config.name, config.learning)?;
        if let Some(seed) = config.seed.or(self.default_seed) {
            agent = agent.with_seed(seed);
        }
        Ok(agent)
    }

    /// Create an agent and load its value table from `path`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::MissingValueTable`] if nothing was saved there.
    pub fn load_agent(&self, config: AgentConfig, path: &Path) -> Result<LearningAgent> {
        let mut agent = self.create_agent(config)?;
        let store = self.store_for(path);
        agent.load_from(store.as_ref())?;
        info!(
            agent = agent.name(),
            location = %store.location(),
            states = agent.values().len(),
            "loaded value table"
        );
        Ok(agent)
    }

    /// Persist the agent's value table at `path`.
    pub fn save_agent(&self, agent: &LearningAgent, path: &Path) -> Result<()> {
        let store = self.store_for(path);
        agent.save_to(store.as_ref())?;
        info!(
            agent = agent.name(),
            location = %store.location(),
            states = agent.values().len(),
            "saved value table"
        );
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an app with custom dependencies.
#[derive(Debug, Default)]
pub struct AppBuilder {
    in_memory: bool,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep value tables in memory instead of files.
    pub fn with_in_memory_stores(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Set a default random seed for all agents created by this app.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        let backend = if self.in_memory {
            StoreBackend::Memory(Arc::default())
        } else {
            StoreBackend::File
        };
        App {
            backend,
            default_seed: self.default_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, tictactoe::BoardState};

    #[test]
    fn test_app_applies_default_seed() {
        let app = App::for_testing().with_default_seed(42).build();
        let agent = app.create_agent(AgentConfig::new("p1")).unwrap();
        assert_eq!(agent.metadata().seed, Some(42));
    }

    #[test]
    fn test_config_seed_overrides_app_default() {
        let app = App::for_testing().with_default_seed(42).build();
        let agent = app
            .create_agent(AgentConfig::new("p1").with_seed(123))
            .unwrap();
        assert_eq!(agent.metadata().seed, Some(123));
    }

    #[test]
    fn test_in_memory_stores_are_shared_per_path() -> Result<()> {
        let app = App::for_testing().with_in_memory_stores().build();
        let mut agent = app.create_agent(AgentConfig::new("p1"))?;
        agent.record_visited(BoardState::new().state_key());
        agent.feed_reward(1.0);

        app.save_agent(&agent, Path::new("policy_p1"))?;
        let loaded = app.load_agent(AgentConfig::new("computer"), Path::new("policy_p1"))?;
        assert_eq!(loaded.values(), agent.values());
        assert_eq!(loaded.name(), "computer");

        let missing = app.load_agent(AgentConfig::new("computer"), Path::new("policy_p2"));
        assert!(matches!(missing, Err(Error::MissingValueTable { .. })));
        Ok(())
    }

    #[test]
    fn test_invalid_learning_config_rejected() {
        let app = App::new();
        let config = AgentConfig::new("p1").with_learning(
            crate::learning::LearningConfig::default().with_learning_rate(3.0),
        );
        assert!(matches!(
            app.create_agent(config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
