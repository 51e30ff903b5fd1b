//! Account-facing game service.
//!
//! Each operation is one atomic turn: take the account's session lock,
//! load owned copies of the account's state, run the rules engine, and
//! save back only if the engine accepted the action. A rejected action
//! leaves the repositories untouched.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use game_core::{
    CharacterState, CharacterView, CreationError, DungeonEngine, DungeonError, DungeonState,
    DungeonView, EnemyId, FightLogEntry, GateId, ItemId, ItemView, NewCharacter, RollSet,
    RollsError, RoomView, SearchOutcome,
};

use crate::api::{Result, ServiceError};
use crate::oracle::OracleManager;
use crate::repository::{
    CharacterRepository, DungeonRepository, InMemoryCharacterRepo, InMemoryDungeonRepo,
    InMemoryRollSetRepo, RollSetRepository,
};
use crate::sessions::SessionRegistry;
use crate::types::AccountId;

/// Builder for [`GameService`]. Oracles are required; repositories default
/// to the in-memory implementations.
#[derive(Default)]
pub struct GameServiceBuilder {
    oracles: Option<OracleManager>,
    characters: Option<Arc<dyn CharacterRepository>>,
    rolls: Option<Arc<dyn RollSetRepository>>,
    dungeons: Option<Arc<dyn DungeonRepository>>,
}

impl GameServiceBuilder {
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn characters(mut self, repo: Arc<dyn CharacterRepository>) -> Self {
        self.characters = Some(repo);
        self
    }

    pub fn rolls(mut self, repo: Arc<dyn RollSetRepository>) -> Self {
        self.rolls = Some(repo);
        self
    }

    pub fn dungeons(mut self, repo: Arc<dyn DungeonRepository>) -> Self {
        self.dungeons = Some(repo);
        self
    }

    pub fn build(self) -> Result<GameService> {
        let oracles = self.oracles.ok_or(ServiceError::MissingOracles)?;
        Ok(GameService {
            oracles,
            characters: self
                .characters
                .unwrap_or_else(|| Arc::new(InMemoryCharacterRepo::new())),
            rolls: self
                .rolls
                .unwrap_or_else(|| Arc::new(InMemoryRollSetRepo::new())),
            dungeons: self
                .dungeons
                .unwrap_or_else(|| Arc::new(InMemoryDungeonRepo::new())),
            sessions: SessionRegistry::new(),
        })
    }
}

/// The request/response boundary of the rules engine.
pub struct GameService {
    oracles: OracleManager,
    characters: Arc<dyn CharacterRepository>,
    rolls: Arc<dyn RollSetRepository>,
    dungeons: Arc<dyn DungeonRepository>,
    sessions: SessionRegistry,
}

impl GameService {
    pub fn builder() -> GameServiceBuilder {
        GameServiceBuilder::default()
    }

    /// The account's ability roll set, generated on first request.
    ///
    /// Repeated calls return the same set unchanged. Once a character has
    /// been created the set is gone and this returns
    /// [`RollsError::AlreadyHasCharacter`].
    #[instrument(skip_all, fields(account = %account))]
    pub async fn rolls(&self, account: &AccountId) -> Result<RollSet> {
        let _guard = self.sessions.lock(account).await;

        if self.characters.load(account)?.is_some() {
            return Err(RollsError::AlreadyHasCharacter.into());
        }
        if let Some(rolls) = self.rolls.load(account)? {
            return Ok(rolls);
        }

        let rolls = RollSet::generate(self.oracles.dice());
        self.rolls.save(account, &rolls)?;
        debug!("generated roll set");
        Ok(rolls)
    }

    /// Create the account's character from its roll set.
    ///
    /// Consumes the roll set on success. Fails if a character already
    /// exists or the request picks rolls that are missing, unknown, or
    /// reused.
    #[instrument(skip_all, fields(account = %account, name = %request.name))]
    pub async fn create_character(
        &self,
        account: &AccountId,
        request: NewCharacter,
    ) -> Result<CharacterState> {
        let _guard = self.sessions.lock(account).await;

        if self.characters.load(account)?.is_some() {
            return Err(CreationError::CharacterExists.into());
        }
        let rolls = self
            .rolls
            .load(account)?
            .ok_or(CreationError::MissingRolls)?;

        let character = CharacterState::create(request, &rolls, self.oracles.config())?;
        self.characters.save(account, &character)?;
        self.rolls.delete(account)?;
        info!("character created");
        Ok(character)
    }

    /// Begin a dungeon run in the starting room.
    ///
    /// At most one run may be active per account.
    #[instrument(skip_all, fields(account = %account))]
    pub async fn start_dungeon(&self, account: &AccountId) -> Result<DungeonView> {
        let _guard = self.sessions.lock(account).await;

        let mut character = self
            .characters
            .load(account)?
            .ok_or(DungeonError::NoCharacter)?;
        if self.dungeons.load(account)?.is_some() {
            return Err(DungeonError::AlreadyActive.into());
        }

        let env = self.oracles.as_env();
        let mut dungeon = DungeonState::new(env.map.starting_room());
        let view = DungeonEngine::new(&mut character, &mut dungeon, env).view()?;
        self.dungeons.save(account, &dungeon)?;
        info!(room = %dungeon.room(), "dungeon started");
        Ok(view)
    }

    /// Snapshot of the active run: character sheet plus current room.
    #[instrument(skip_all, fields(account = %account))]
    pub async fn status(&self, account: &AccountId) -> Result<DungeonView> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let view =
            DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env()).view()?;
        Ok(view)
    }

    /// Abandon the active run, discarding all per-run state.
    ///
    /// The character survives with whatever it carries and has equipped;
    /// room bonuses and reveal progress are lost.
    #[instrument(skip_all, fields(account = %account))]
    pub async fn end_dungeon(&self, account: &AccountId) -> Result<()> {
        let _guard = self.sessions.lock(account).await;

        self.dungeons
            .load(account)?
            .ok_or(DungeonError::NotActive)?;
        self.dungeons.delete(account)?;
        info!("dungeon ended");
        Ok(())
    }

    /// Walk through a visible gate into its destination room.
    #[instrument(skip_all, fields(account = %account, gate = %gate))]
    pub async fn follow_gate(&self, account: &AccountId, gate: GateId) -> Result<RoomView> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let view = DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env())
            .follow_gate(gate)?;
        self.save_run(account, &character, &dungeon)?;
        Ok(view)
    }

    /// Exchange blows with one standing enemy in the current room.
    ///
    /// Returns the fight log: the character's attack first, then one
    /// defending entry per enemy in the room.
    #[instrument(skip_all, fields(account = %account, enemy = %enemy))]
    pub async fn attack(&self, account: &AccountId, enemy: EnemyId) -> Result<Vec<FightLogEntry>> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let log =
            DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env()).attack(enemy)?;
        self.save_run(account, &character, &dungeon)?;
        debug!(hit_points = character.base.hit_points, "fight resolved");
        Ok(log)
    }

    /// Pick up a visible item from the current room into the bag.
    #[instrument(skip_all, fields(account = %account, item = %item))]
    pub async fn take_item(&self, account: &AccountId, item: ItemId) -> Result<ItemView> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let view = DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env())
            .take_item(item)?;
        self.save_run(account, &character, &dungeon)?;
        Ok(view)
    }

    /// Use a bag item: equip a weapon or armor, or drink a consumable.
    #[instrument(skip_all, fields(account = %account, item = %item))]
    pub async fn use_item(&self, account: &AccountId, item: ItemId) -> Result<CharacterView> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let view = DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env())
            .use_item(item)?;
        self.save_run(account, &character, &dungeon)?;
        Ok(view)
    }

    /// Search the current room for hidden items and gates.
    ///
    /// Blocked while enemies stand in the room; costs a hit point when
    /// attempted.
    #[instrument(skip_all, fields(account = %account))]
    pub async fn search(&self, account: &AccountId) -> Result<SearchOutcome> {
        let _guard = self.sessions.lock(account).await;

        let (mut character, mut dungeon) = self.load_run(account)?;
        let outcome =
            DungeonEngine::new(&mut character, &mut dungeon, self.oracles.as_env()).search()?;
        self.save_run(account, &character, &dungeon)?;
        Ok(outcome)
    }

    fn load_run(&self, account: &AccountId) -> Result<(CharacterState, DungeonState)> {
        let character = self
            .characters
            .load(account)?
            .ok_or(DungeonError::NoCharacter)?;
        let dungeon = self
            .dungeons
            .load(account)?
            .ok_or(DungeonError::NotActive)?;
        Ok((character, dungeon))
    }

    fn save_run(
        &self,
        account: &AccountId,
        character: &CharacterState,
        dungeon: &DungeonState,
    ) -> Result<()> {
        self.characters.save(account, character)?;
        self.dungeons.save(account, dungeon)?;
        Ok(())
    }
}
