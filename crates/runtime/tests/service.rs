//! End-to-end tests of the game service over the bundled campaign.
//!
//! Dice are scripted so every combat and search outcome is exact. The
//! campaign starts in room 1 (gate 1 to room 2, a hidden gate 2 to room 5)
//! and room 2 holds a giant rat (attack 4, defence 2, 6 hit points,
//! damage 2) plus an iron sword (item 4, attack 4, damage rating 5).

use std::sync::Arc;

use game_content::Campaign;
use game_core::{
    CreationError, DiceOracle, DungeonError, EnemyId, ErrorKind, FightKind, GateId, ItemId,
    NewCharacter, RollId, RollsError, RoomId, ScriptedDice, SearchFind,
};
use runtime::{AccountId, GameService, OracleManager, ServiceError};

/// Fifteen d6 values giving roll scores 9, 12, 15, 18, 6 for ids 1 to 5.
const ROLL_SCRIPT: [u32; 15] = [3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 2, 2, 2];

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn service_with_script(values: impl IntoIterator<Item = u32>) -> (GameService, Arc<ScriptedDice>) {
    init_tracing();
    let dice = Arc::new(ScriptedDice::new(values));
    let campaign = Campaign::builtin().unwrap();
    let service = GameService::builder()
        .oracles(OracleManager::from_campaign(
            campaign,
            dice.clone() as Arc<dyn DiceOracle>,
        ))
        .build()
        .unwrap();
    (service, dice)
}

/// Rolls and creates a character with attack 18, defence 12, wisdom 15 and
/// 19 hit points. Consumes `ROLL_SCRIPT` from the dice.
async fn onboard(service: &GameService, account: &AccountId) {
    service.rolls(account).await.unwrap();
    service
        .create_character(
            account,
            NewCharacter {
                name: "Brynn".into(),
                description: "A wary sellsword.".into(),
                strength: RollId(4),
                intellect: RollId(3),
                dexterity: RollId(2),
                constitution: RollId(1),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn roll_sets_are_stable_until_character_creation() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let account = AccountId::from("alice");

    let first = service.rolls(&account).await.unwrap();
    let second = service.rolls(&account).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rolls().len(), 5);
    for roll in first.rolls() {
        assert!((3..=18).contains(&roll.score()));
    }

    service
        .create_character(
            &account,
            NewCharacter {
                name: "Brynn".into(),
                description: String::new(),
                strength: RollId(4),
                intellect: RollId(3),
                dexterity: RollId(2),
                constitution: RollId(1),
            },
        )
        .await
        .unwrap();

    let err = service.rolls(&account).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Rolls(RollsError::AlreadyHasCharacter)
    ));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn character_creation_validates_roll_picks() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let account = AccountId::from("alice");

    // No roll set requested yet.
    let err = service
        .create_character(
            &account,
            NewCharacter {
                name: "Brynn".into(),
                description: String::new(),
                strength: RollId(1),
                intellect: RollId(2),
                dexterity: RollId(3),
                constitution: RollId(4),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Creation(CreationError::MissingRolls)
    ));

    service.rolls(&account).await.unwrap();

    // Same roll picked for two abilities.
    let err = service
        .create_character(
            &account,
            NewCharacter {
                name: "Brynn".into(),
                description: String::new(),
                strength: RollId(1),
                intellect: RollId(1),
                dexterity: RollId(2),
                constitution: RollId(3),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Creation(CreationError::DuplicateRoll(RollId(1)))
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);

    let character = service
        .create_character(
            &account,
            NewCharacter {
                name: "Brynn".into(),
                description: String::new(),
                strength: RollId(4),
                intellect: RollId(3),
                dexterity: RollId(2),
                constitution: RollId(1),
            },
        )
        .await
        .unwrap();
    assert_eq!(character.base.attack, 18);
    assert_eq!(character.base.defence, 12);
    assert_eq!(character.base.wisdom, 15);
    assert_eq!(character.base.hit_points, 19);
    assert_eq!(
        character.bag,
        vec![ItemId(1), ItemId(2), ItemId(3)],
        "starter items"
    );

    let err = service
        .create_character(
            &account,
            NewCharacter {
                name: "Again".into(),
                description: String::new(),
                strength: RollId(1),
                intellect: RollId(2),
                dexterity: RollId(3),
                constitution: RollId(4),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn dungeon_lifecycle() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let account = AccountId::from("alice");

    // No character yet.
    let err = service.start_dungeon(&account).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::NoCharacter)
    ));

    onboard(&service, &account).await;

    let view = service.start_dungeon(&account).await.unwrap();
    assert_eq!(view.room.id, RoomId(1));
    // The hidden gate to room 5 must not be visible before a search.
    let gates: Vec<GateId> = view.room.gates.iter().map(|gate| gate.id).collect();
    assert_eq!(gates, vec![GateId(1)]);

    let status = service.status(&account).await.unwrap();
    assert_eq!(status, view);

    let err = service.start_dungeon(&account).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::AlreadyActive)
    ));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    service.end_dungeon(&account).await.unwrap();
    let err = service.status(&account).await.unwrap_err();
    assert!(matches!(err, ServiceError::Dungeon(DungeonError::NotActive)));
    let err = service.end_dungeon(&account).await.unwrap_err();
    assert!(matches!(err, ServiceError::Dungeon(DungeonError::NotActive)));

    // A fresh run starts back at the entrance.
    let view = service.start_dungeon(&account).await.unwrap();
    assert_eq!(view.room.id, RoomId(1));
}

#[tokio::test]
async fn fight_log_matches_scripted_dice() {
    let script: Vec<u32> = ROLL_SCRIPT.iter().copied().chain([16, 5]).collect();
    let (service, dice) = service_with_script(script);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();

    let room = service.follow_gate(&account, GateId(1)).await.unwrap();
    assert_eq!(room.id, RoomId(2));
    assert_eq!(room.enemies[0].id, EnemyId(101));
    assert_eq!(room.enemies[0].hit_points, 6);

    let log = service.attack(&account, EnemyId(101)).await.unwrap();
    assert_eq!(log.len(), 2, "one attacking entry plus one defender");

    // Attack 18 against defence 2: value 16, d20 16, 32 > 12 hits for the
    // default damage of 2.
    assert_eq!(log[0].kind, FightKind::Attacking);
    assert_eq!(log[0].id, EnemyId(101));
    assert_eq!(log[0].value, 16);
    assert_eq!(log[0].dice, 16);
    assert!(log[0].hit);
    assert_eq!(log[0].damage, 2);

    // Rat attack 4 against defence 12: value -8, d20 5, -3 misses.
    assert_eq!(log[1].kind, FightKind::Defending);
    assert_eq!(log[1].id, EnemyId(101));
    assert_eq!(log[1].value, -8);
    assert_eq!(log[1].dice, 5);
    assert!(!log[1].hit);
    assert_eq!(log[1].damage, 0);

    let status = service.status(&account).await.unwrap();
    assert_eq!(status.character.hit_points, 19, "the rat missed");
    assert_eq!(status.room.enemies[0].hit_points, 4);

    // Two more hits kill the rat; its dying exchange still rolls back.
    dice.extend([16, 5, 16, 5]);
    service.attack(&account, EnemyId(101)).await.unwrap();
    let log = service.attack(&account, EnemyId(101)).await.unwrap();
    assert_eq!(log.len(), 2);
    assert!(log[0].hit);

    let status = service.status(&account).await.unwrap();
    assert!(status.room.enemies.is_empty());

    let err = service.attack(&account, EnemyId(101)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::EnemyNotFound(EnemyId(101)))
    ));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn cleared_room_allows_taking_and_equipping_the_sword() {
    let script: Vec<u32> = ROLL_SCRIPT
        .iter()
        .copied()
        .chain([16, 5, 16, 5, 16, 5])
        .collect();
    let (service, _) = service_with_script(script);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();
    service.follow_gate(&account, GateId(1)).await.unwrap();

    // Taking is blocked while the rat stands.
    let err = service.take_item(&account, ItemId(4)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::RoomNotCleared)
    ));
    assert_eq!(err.kind(), ErrorKind::Blocked);

    for _ in 0..3 {
        service.attack(&account, EnemyId(101)).await.unwrap();
    }

    let taken = service.take_item(&account, ItemId(4)).await.unwrap();
    assert_eq!(taken.name, "Iron Sword");

    let err = service.take_item(&account, ItemId(4)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::ItemNotInRoom(ItemId(4)))
    ));

    let view = service.use_item(&account, ItemId(4)).await.unwrap();
    assert_eq!(view.equipped_attack_item, Some(ItemId(4)));
    assert_eq!(view.attack, 22, "base 18 plus the sword's 4");
    assert!(view.bag.iter().any(|item| item.id == ItemId(4)), "equipping keeps the item in the bag");
}

#[tokio::test]
async fn consumable_bonuses_last_until_the_next_gate() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();

    // Battle Tonic: +2 attack, +1 defence, +1 wisdom, +2 hit points.
    let view = service.use_item(&account, ItemId(3)).await.unwrap();
    assert_eq!(view.room_attack_bonus, 2);
    assert_eq!(view.attack, 20);
    assert_eq!(view.hit_points, 21);
    assert!(!view.bag.iter().any(|item| item.id == ItemId(3)));

    // Drinking it again fails; it is gone from the bag.
    let err = service.use_item(&account, ItemId(3)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::ItemNotInBag(ItemId(3)))
    ));

    service.follow_gate(&account, GateId(1)).await.unwrap();
    let status = service.status(&account).await.unwrap();
    assert_eq!(status.character.room_attack_bonus, 0);
    assert_eq!(status.character.attack, 18);
    assert_eq!(status.character.hit_points, 19);
}

#[tokio::test]
async fn search_is_blocked_while_enemies_are_present() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();
    service.follow_gate(&account, GateId(1)).await.unwrap();

    let err = service.search(&account).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dungeon(DungeonError::EnemiesPresent)
    ));
    assert_eq!(err.kind(), ErrorKind::Blocked);

    // A blocked search costs nothing.
    let status = service.status(&account).await.unwrap();
    assert_eq!(status.character.hit_points, 19);
}

#[tokio::test]
async fn search_reveals_the_hidden_gate() {
    // After the roll script: a 3 beats wisdom 15, an 18 does not.
    let script: Vec<u32> = ROLL_SCRIPT.iter().copied().chain([3, 18]).collect();
    let (service, _) = service_with_script(script);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();

    let outcome = service.search(&account).await.unwrap();
    assert_eq!(outcome.roll, 3);
    assert_eq!(outcome.found, Some(SearchFind::Gate(GateId(2))));

    let status = service.status(&account).await.unwrap();
    assert_eq!(status.character.hit_points, 18, "searching costs a hit point");
    assert!(status.room.gates.iter().any(|gate| gate.id == GateId(2)));

    // A failed search still costs a hit point and reveals nothing.
    let outcome = service.search(&account).await.unwrap();
    assert_eq!(outcome.roll, 18);
    assert_eq!(outcome.found, None);
    let status = service.status(&account).await.unwrap();
    assert_eq!(status.character.hit_points, 17);

    // The revealed gate is traversable.
    let room = service.follow_gate(&account, GateId(2)).await.unwrap();
    assert_eq!(room.id, RoomId(5));
}

#[tokio::test]
async fn fight_log_serializes_to_the_wire_shape() {
    let script: Vec<u32> = ROLL_SCRIPT.iter().copied().chain([16, 5]).collect();
    let (service, _) = service_with_script(script);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;
    service.start_dungeon(&account).await.unwrap();
    service.follow_gate(&account, GateId(1)).await.unwrap();

    let log = service.attack(&account, EnemyId(101)).await.unwrap();
    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({
            "type": "attacking",
            "id": 101,
            "value": 16,
            "dice": 16,
            "hit": true,
            "damage": 2,
        })
    );
    assert_eq!(json[1]["type"], "defending");
}

#[tokio::test]
async fn concurrent_starts_admit_exactly_one_run() {
    let (service, _) = service_with_script(ROLL_SCRIPT);
    let service = Arc::new(service);
    let account = AccountId::from("alice");
    onboard(&service, &account).await;

    let mut handles = Vec::new();
    for _ in 0..2 {
        let service = Arc::clone(&service);
        let account = account.clone();
        handles.push(tokio::spawn(
            async move { service.start_dungeon(&account).await },
        ));
    }

    let mut started = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => started += 1,
            Err(ServiceError::Dungeon(DungeonError::AlreadyActive)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(started, 1);
    assert_eq!(conflicts, 1);
}
