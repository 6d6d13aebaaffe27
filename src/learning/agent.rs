//! State-value learning agent
//!
//! The agent keeps one value estimate per board state it has reached. Moves
//! are chosen ε-greedily by looking one ply ahead, and at the end of each
//! game the terminal reward is propagated backward through the states the
//! agent visited.

use tracing::debug;

use super::{
    config::LearningConfig,
    serialization::{SavedValueTable, TrainingMetadata},
    value_table::ValueTable,
};
use crate::{
    Result,
    adapters::SeededRandom,
    error::Error,
    ports::{Agent, RandomSource, ValueStore},
    tictactoe::{BoardState, Player},
    types::{Position, StateKey},
};

/// Tabular state-value learner
#[derive(Debug)]
pub struct LearningAgent {
    name: String,
    config: LearningConfig,
    values: ValueTable,
    trace: Vec<StateKey>,
    rng: Box<dyn RandomSource>,
    metadata: TrainingMetadata,
}

impl LearningAgent {
    /// Create an agent with an empty table and an unseeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails validation.
    pub fn new(name: impl Into<String>, config: LearningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            values: ValueTable::new(),
            trace: Vec::new(),
            rng: Box::new(SeededRandom::default()),
            metadata: TrainingMetadata::default(),
        })
    }

    /// Seed the exploration random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Box::new(SeededRandom::new(Some(seed)));
        self.metadata.seed = Some(seed);
        self
    }

    /// Replace the exploration random source.
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Change the exploration rate, e.g. to 0 for a purely greedy opponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the rate is outside `[0, 1]`.
    pub fn with_exploration_rate(mut self, exploration_rate: f64) -> Result<Self> {
        let config = self.config.with_exploration_rate(exploration_rate);
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// States visited in the current game, oldest first
    pub fn trace(&self) -> &[StateKey] {
        &self.trace
    }

    pub fn metadata(&self) -> &TrainingMetadata {
        &self.metadata
    }

    /// ε-greedy move choice.
    ///
    /// With probability `exploration_rate` a uniformly random position is
    /// returned. Otherwise every candidate is scored by the value of the board
    /// it would produce, and the best one wins. Candidates are compared with
    /// `>=`, so among equally valued positions the last one in `positions`
    /// is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if `positions` is empty, and
    /// [`Error::InvalidMove`] if a candidate is already occupied on `board`.
    pub fn choose_action(
        &mut self,
        positions: &[Position],
        board: &BoardState,
        mark: Player,
    ) -> Result<Position> {
        if positions.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.rng.next_unit() < self.config.exploration_rate {
            let index = self.rng.next_index(positions.len());
            return Ok(positions[index]);
        }

        self.greedy_action(positions, board, mark)
    }

    fn greedy_action(
        &self,
        positions: &[Position],
        board: &BoardState,
        mark: Player,
    ) -> Result<Position> {
        let mut action = positions[0];
        let mut value_max = f64::NEG_INFINITY;

        for &pos in positions {
            let next_key = board.with_mark(pos, mark)?.state_key();
            let value = self.values.get(&next_key);
            if value >= value_max {
                value_max = value;
                action = pos;
            }
        }

        Ok(action)
    }

    /// Append a state to the episode trace.
    pub fn record_visited(&mut self, state: StateKey) {
        self.trace.push(state);
    }

    /// Propagate a terminal reward backward through the episode trace.
    ///
    /// Walking the trace from the last visited state to the first, each state
    /// is moved toward the discounted reward, and its updated value becomes
    /// the reward for the state before it. The trace itself is left intact;
    /// an empty trace is a no-op.
    pub fn feed_reward(&mut self, reward: f64) {
        if self.trace.is_empty() {
            return;
        }

        let LearningConfig {
            learning_rate,
            discount,
            ..
        } = self.config;

        let mut reward = reward;
        for state in self.trace.iter().rev() {
            reward = self
                .values
                .backup(state.clone(), reward, learning_rate, discount);
        }

        self.metadata.episodes += 1;
        debug!(
            agent = %self.name,
            states = self.trace.len(),
            table_size = self.values.len(),
            "fed reward"
        );
    }

    /// Empty the episode trace.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Serialize the value table into a self-describing blob.
    pub fn export_values(&self) -> Result<Vec<u8>> {
        SavedValueTable::new(&self.name, self.values.clone(), self.metadata.clone()).to_bytes()
    }

    /// Replace the value table with one decoded from `blob`.
    ///
    /// The current table is kept if decoding fails. Episode counts carry
    /// over from the saved table; a seed set on this agent wins over the
    /// saved one.
    ///
    /// # Errors
    ///
    /// Returns an error for corrupt blobs or unsupported format versions.
    pub fn import_values(&mut self, blob: &[u8]) -> Result<()> {
        let saved = SavedValueTable::from_bytes(blob)?;
        debug!(
            agent = %self.name,
            saved_as = %saved.name,
            states = saved.values.len(),
            "imported value table"
        );
        self.values = saved.values;
        self.metadata = TrainingMetadata {
            seed: self.metadata.seed.or(saved.metadata.seed),
            ..saved.metadata
        };
        Ok(())
    }

    /// Export the table and hand it to `store`.
    pub fn save_to(&self, store: &dyn ValueStore) -> Result<()> {
        store.save(&self.export_values()?)
    }

    /// Load the table from `store`.
    ///
    /// # Errors
    ///
    /// A missing blob is reported as [`Error::MissingValueTable`]; it is never
    /// silently replaced by an empty table.
    pub fn load_from(&mut self, store: &dyn ValueStore) -> Result<()> {
        let blob = store.load()?;
        self.import_values(&blob)
    }
}

impl Agent for LearningAgent {
    fn name(&self) -> &str {
        LearningAgent::name(self)
    }

    fn choose_action(
        &mut self,
        positions: &[Position],
        board: &BoardState,
        mark: Player,
    ) -> Result<Position> {
        LearningAgent::choose_action(self, positions, board, mark)
    }

    fn record_visited(&mut self, state: StateKey) {
        LearningAgent::record_visited(self, state);
    }

    fn feed_reward(&mut self, reward: f64) {
        LearningAgent::feed_reward(self, reward);
    }

    fn clear_trace(&mut self) {
        LearningAgent::clear_trace(self);
    }
}
