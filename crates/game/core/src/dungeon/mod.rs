//! The live dungeon run and its state machine.
//!
//! [`DungeonState`] is the per-account run aggregate: the current room
//! pointer, the ephemeral room bonuses, and a per-room overlay of what this
//! run has revealed, taken, damaged, and slain. Room templates stay in the
//! static catalogs; a room's content is always template plus overlay, never
//! regenerated.
//!
//! [`DungeonEngine`] executes one action at a time against the character and
//! run aggregates. Every action validates its preconditions before touching
//! state, so an error always leaves both aggregates unchanged; the caller is
//! responsible for serializing actions per account and for persisting the
//! aggregates afterwards.
pub mod error;
pub mod view;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::character::CharacterState;
use crate::combat::{self, FightLogEntry};
use crate::env::{EnemyTemplate, Env, GateDefinition, ItemCategory, ItemDefinition, OracleError, RoomTemplate};
use crate::stats::{EffectiveStats, RoomBonuses};
use crate::{EnemyId, GateId, ItemId, RoomId};

pub use error::DungeonError;
use view::{CharacterView, DungeonView, EnemyView, ItemView, RoomView};

/// Per-room overlay of everything a run has changed in that room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct RoomProgress {
    revealed_items: BTreeSet<ItemId>,
    revealed_gates: BTreeSet<GateId>,
    taken_items: BTreeSet<ItemId>,
    /// Current hit points of damaged-but-alive enemies; absent means the
    /// template value still stands.
    enemy_hp: BTreeMap<EnemyId, i32>,
    slain: BTreeSet<EnemyId>,
}

/// The live run state for one account. Created on dungeon start, discarded
/// on end; the character and its bag outlive it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonState {
    room: RoomId,
    bonuses: RoomBonuses,
    progress: BTreeMap<RoomId, RoomProgress>,
}

impl DungeonState {
    /// Fresh run placed in the starting room with zeroed bonuses.
    pub fn new(starting_room: RoomId) -> Self {
        Self {
            room: starting_room,
            bonuses: RoomBonuses::default(),
            progress: BTreeMap::new(),
        }
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn bonuses(&self) -> RoomBonuses {
        self.bonuses
    }
}

/// What a search revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum SearchFind {
    Item(ItemId),
    Gate(GateId),
}

/// Result of one search attempt. `found` is `None` when the roll failed or
/// the room has nothing left to reveal; the hit-point cost applies either
/// way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    #[serde(flatten)]
    pub found: Option<SearchFind>,
    pub roll: u32,
}

/// Currently visible contents of a room: template minus takes and kills,
/// plus this run's reveals.
struct Occupancy {
    items: Vec<ItemId>,
    enemies: Vec<(EnemyId, i32)>,
    gates: Vec<GateDefinition>,
}

/// Executes actions against one account's character and run aggregates.
pub struct DungeonEngine<'a> {
    character: &'a mut CharacterState,
    dungeon: &'a mut DungeonState,
    env: Env<'a>,
}

impl<'a> DungeonEngine<'a> {
    pub fn new(
        character: &'a mut CharacterState,
        dungeon: &'a mut DungeonState,
        env: Env<'a>,
    ) -> Self {
        Self {
            character,
            dungeon,
            env,
        }
    }

    // ===== catalog lookups =====

    fn template(&self) -> Result<&'a RoomTemplate, DungeonError> {
        let room = self.dungeon.room;
        self.env
            .map
            .room(room)
            .ok_or(DungeonError::Oracle(OracleError::UnknownRoom(room)))
    }

    fn item(&self, id: ItemId) -> Result<&'a ItemDefinition, DungeonError> {
        self.env
            .items
            .definition(id)
            .ok_or(DungeonError::Oracle(OracleError::UnknownItem(id)))
    }

    fn enemy(&self, id: EnemyId) -> Result<&'a EnemyTemplate, DungeonError> {
        self.env
            .enemies
            .template(id)
            .ok_or(DungeonError::Oracle(OracleError::UnknownEnemy(id)))
    }

    // ===== resolved state =====

    fn occupancy(&self) -> Result<Occupancy, DungeonError> {
        let template = self.template()?;
        let fresh = RoomProgress::default();
        let progress = self.dungeon.progress.get(&template.id).unwrap_or(&fresh);

        let items = template
            .items
            .iter()
            .chain(
                template
                    .hidden_items
                    .iter()
                    .filter(|id| progress.revealed_items.contains(id)),
            )
            .copied()
            .filter(|id| !progress.taken_items.contains(id))
            .collect();

        let mut enemies = Vec::new();
        for id in &template.enemies {
            if progress.slain.contains(id) {
                continue;
            }
            let hit_points = match progress.enemy_hp.get(id) {
                Some(current) => *current,
                None => self.enemy(*id)?.hit_points,
            };
            enemies.push((*id, hit_points));
        }

        let gates = template
            .gates
            .iter()
            .chain(
                template
                    .hidden_gates
                    .iter()
                    .filter(|gate| progress.revealed_gates.contains(&gate.id)),
            )
            .copied()
            .collect();

        Ok(Occupancy {
            items,
            enemies,
            gates,
        })
    }

    fn effective_stats(&self) -> Result<EffectiveStats, DungeonError> {
        let weapon = self
            .character
            .equipped_attack_item
            .map(|id| self.item(id))
            .transpose()?;
        let armor = self
            .character
            .equipped_defence_item
            .map(|id| self.item(id))
            .transpose()?;
        Ok(EffectiveStats::layered(
            self.character.base,
            [weapon, armor],
            self.dungeon.bonuses,
            self.env.config().default_damage,
        ))
    }

    fn progress_mut(&mut self) -> &mut RoomProgress {
        self.dungeon.progress.entry(self.dungeon.room).or_default()
    }

    // ===== views =====

    pub fn character_view(&self) -> Result<CharacterView, DungeonError> {
        let stats = self.effective_stats()?;
        let bag = self
            .character
            .bag
            .iter()
            .map(|id| self.item(*id).map(ItemView::from))
            .collect::<Result<_, _>>()?;
        Ok(CharacterView::layered(
            self.character,
            stats,
            self.dungeon.bonuses,
            bag,
        ))
    }

    pub fn room_view(&self) -> Result<RoomView, DungeonError> {
        let template = self.template()?;
        let occupancy = self.occupancy()?;
        let items = occupancy
            .items
            .iter()
            .map(|id| self.item(*id).map(ItemView::from))
            .collect::<Result<_, _>>()?;
        let enemies = occupancy
            .enemies
            .iter()
            .map(|(id, hit_points)| {
                self.enemy(*id)
                    .map(|template| EnemyView::standing(template, *hit_points))
            })
            .collect::<Result<_, _>>()?;
        Ok(RoomView {
            id: template.id,
            description: template.description.clone(),
            items,
            enemies,
            gates: occupancy.gates.into_iter().map(Into::into).collect(),
        })
    }

    pub fn view(&self) -> Result<DungeonView, DungeonError> {
        Ok(DungeonView {
            character: self.character_view()?,
            room: self.room_view()?,
        })
    }

    // ===== actions =====

    /// Traverse a visible gate of the current room.
    ///
    /// Moves the run's room pointer and unconditionally zeroes all four
    /// ephemeral room bonuses, whatever their prior values.
    pub fn follow_gate(&mut self, gate_id: GateId) -> Result<RoomView, DungeonError> {
        let occupancy = self.occupancy()?;
        let gate = occupancy
            .gates
            .iter()
            .find(|gate| gate.id == gate_id)
            .copied()
            .ok_or(DungeonError::GateNotFound(gate_id))?;
        if self.env.map.room(gate.room).is_none() {
            return Err(DungeonError::Oracle(OracleError::UnknownRoom(gate.room)));
        }

        self.dungeon.room = gate.room;
        self.dungeon.bonuses = RoomBonuses::default();
        self.room_view()
    }

    /// Resolve one attack action against `enemy_id` as a single atomic
    /// exchange.
    ///
    /// The log holds the attacking entry first, then one defending entry per
    /// enemy present at action start (the target included, with its
    /// pre-attack stats). The summed defending damage is applied to the
    /// character once; hit points may drop to zero or below, death policy is
    /// the caller's.
    pub fn attack(&mut self, enemy_id: EnemyId) -> Result<Vec<FightLogEntry>, DungeonError> {
        let occupancy = self.occupancy()?;
        let target_hp = occupancy
            .enemies
            .iter()
            .find(|(id, _)| *id == enemy_id)
            .map(|(_, hit_points)| *hit_points)
            .ok_or(DungeonError::EnemyNotFound(enemy_id))?;

        let stats = self.effective_stats()?;
        let threshold = self.env.config().hit_threshold;
        let defenders = occupancy
            .enemies
            .iter()
            .map(|(id, _)| self.enemy(*id))
            .collect::<Result<Vec<_>, _>>()?;
        let target = self.enemy(enemy_id)?;

        let mut log = Vec::with_capacity(defenders.len() + 1);

        let attacking = combat::attacking_roll(&stats, target, self.env.dice, threshold);
        if attacking.hit {
            let remaining = target_hp - attacking.damage;
            let progress = self.progress_mut();
            if remaining <= 0 {
                progress.enemy_hp.remove(&enemy_id);
                progress.slain.insert(enemy_id);
            } else {
                progress.enemy_hp.insert(enemy_id, remaining);
            }
        }
        log.push(attacking);

        let mut incoming = 0;
        for defender in defenders {
            let defending = combat::defending_roll(defender, &stats, self.env.dice, threshold);
            incoming += defending.damage;
            log.push(defending);
        }
        self.character.base.hit_points -= incoming;

        Ok(log)
    }

    /// Move a visible room item into the character's bag.
    pub fn take_item(&mut self, item_id: ItemId) -> Result<ItemView, DungeonError> {
        let occupancy = self.occupancy()?;
        if self.env.config().take_requires_cleared_room && !occupancy.enemies.is_empty() {
            return Err(DungeonError::RoomNotCleared);
        }
        if !occupancy.items.contains(&item_id) {
            return Err(DungeonError::ItemNotInRoom(item_id));
        }
        let item = self.item(item_id)?;
        let view = ItemView::from(item);

        self.progress_mut().taken_items.insert(item_id);
        self.character.bag.push(item_id);
        Ok(view)
    }

    /// Use a bag item: consumables feed the ephemeral room bonuses and are
    /// destroyed; weapons and armor occupy their equip slot, overwriting any
    /// previous equip (which stays in the bag).
    pub fn use_item(&mut self, item_id: ItemId) -> Result<CharacterView, DungeonError> {
        if !self.character.has_in_bag(item_id) {
            return Err(DungeonError::ItemNotInBag(item_id));
        }
        let item = self.item(item_id)?;
        match item.category {
            ItemCategory::Consumable => {
                self.dungeon.bonuses.absorb(item);
                self.character.remove_from_bag(item_id);
            }
            ItemCategory::Weapon => {
                self.character.equipped_attack_item = Some(item_id);
            }
            ItemCategory::Armor => {
                self.character.equipped_defence_item = Some(item_id);
            }
        }
        self.character_view()
    }

    /// Attempt to reveal one hidden entity of the current room.
    ///
    /// Refused outright (no roll, no cost) while enemies remain or when the
    /// character cannot afford the cost. Otherwise the d20 is checked
    /// against effective wisdom and one hit point is deducted whatever the
    /// outcome. Reveal tie-break is fixed: hidden items before hidden
    /// gates, each in template order.
    pub fn search(&mut self) -> Result<SearchOutcome, DungeonError> {
        let occupancy = self.occupancy()?;
        if !occupancy.enemies.is_empty() {
            return Err(DungeonError::EnemiesPresent);
        }
        let stats = self.effective_stats()?;
        let config = self.env.config();
        if stats.hit_points <= config.search_min_hit_points {
            return Err(DungeonError::Exhausted);
        }

        let roll = self.env.dice.d20();
        let cost = config.search_cost;
        self.character.base.hit_points -= cost;

        if (roll as i32) < stats.wisdom {
            let template = self.template()?;
            let progress = self.dungeon.progress.entry(template.id).or_default();

            let hidden_item = template.hidden_items.iter().copied().find(|id| {
                !progress.revealed_items.contains(id) && !progress.taken_items.contains(id)
            });
            if let Some(item) = hidden_item {
                progress.revealed_items.insert(item);
                return Ok(SearchOutcome {
                    found: Some(SearchFind::Item(item)),
                    roll,
                });
            }

            let hidden_gate = template
                .hidden_gates
                .iter()
                .find(|gate| !progress.revealed_gates.contains(&gate.id));
            if let Some(gate) = hidden_gate {
                progress.revealed_gates.insert(gate.id);
                return Ok(SearchOutcome {
                    found: Some(SearchFind::Gate(gate.id)),
                    roll,
                });
            }
        }

        Ok(SearchOutcome { found: None, roll })
    }
}
