//! Scoreboard integration tests: persistence round trips, restarts, and
//! custom roster configurations.

use euchred::core::{PlayerId, PlayerRecord, RosterConfig, ScoreError};
use euchred::leaders::LeaderChange;
use euchred::scoreboard::{Headline, Scoreboard};
use euchred::store::{MemoryRepository, PlayerField, PlayerRepository};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ids<R: PlayerRepository>(board: &Scoreboard<R>) -> Vec<PlayerId> {
    board.players().iter().map(PlayerRecord::id).collect()
}

/// Repository that records every write, to check the store writes through.
#[derive(Default)]
struct RecordingRepository {
    inner: MemoryRepository,
    inserts: usize,
    updates: Vec<(PlayerId, PlayerField)>,
}

impl PlayerRepository for RecordingRepository {
    fn list_ordered(&self) -> Vec<PlayerRecord> {
        self.inner.list_ordered()
    }

    fn insert(&mut self, record: PlayerRecord) {
        self.inserts += 1;
        self.inner.insert(record);
    }

    fn update(&mut self, id: PlayerId, field: PlayerField) {
        self.updates.push((id, field.clone()));
        self.inner.update(id, field);
    }
}

#[test]
fn test_restart_does_not_replay_celebration() {
    init_logging();

    let mut board = Scoreboard::in_memory(RosterConfig::default()).unwrap();
    let ids = ids(&board);
    board.increment(ids[0]).unwrap();
    board.increment(ids[0]).unwrap();
    board.increment(ids[2]).unwrap();

    let saved = board.into_repository().to_json().unwrap();

    let repo = MemoryRepository::from_json(&saved).unwrap();
    let mut board = Scoreboard::open(repo, RosterConfig::default()).unwrap();

    // Loaded roster is not re-initialized.
    assert_eq!(board.players().len(), 4);
    assert_eq!(board.players()[0].score(), 2);
    assert_eq!(board.headline(), Headline::Leaders(["Player One".to_owned()].into_iter().collect()));

    let update = board.recompute();
    assert!(!update.celebrate);
    assert_eq!(update.change, LeaderChange::Unchanged);

    // A real change after restart still celebrates.
    let update = board.increment(ids[2]).unwrap();
    assert_eq!(update.change, LeaderChange::TieJoined);
    assert!(update.celebrate);
}

#[test]
fn test_corrupt_roster_is_rejected_on_open() {
    init_logging();

    // Two rows sharing an id would let memory and storage disagree.
    let repo = MemoryRepository::from_records([
        PlayerRecord::new(PlayerId::new(0), "Ann", 0),
        PlayerRecord::new(PlayerId::new(0), "Ben", 1),
    ]);
    let result = Scoreboard::open(repo, RosterConfig::default());
    assert!(matches!(result, Err(ScoreError::Roster(_))));

    let repo = RecordingRepository {
        inner: MemoryRepository::from_records([
            PlayerRecord::new(PlayerId::new(0), " Ann ", 0).with_score(2),
            PlayerRecord::new(PlayerId::new(1), "Ben", 1),
        ]),
        ..RecordingRepository::default()
    };
    let board = Scoreboard::open(repo, RosterConfig::default()).unwrap();
    assert_eq!(board.players()[0].name(), "Ann");
    assert_eq!(board.leader_score(), 2);

    let repo = board.into_repository();
    assert_eq!(repo.inserts, 0);
    assert_eq!(repo.updates, [(PlayerId::new(0), PlayerField::Name("Ann".to_owned()))]);
}

#[test]
fn test_writes_go_through_repository() {
    init_logging();

    let mut board = Scoreboard::open(RecordingRepository::default(), RosterConfig::new(["Ann", "Ben"])).unwrap();
    let ids = ids(&board);

    board.increment(ids[1]).unwrap();
    board.rename(ids[0], "Annie").unwrap();
    board.rename(ids[0], "  ").unwrap();
    board.decrement(ids[0]).unwrap();

    let repo = board.into_repository();
    assert_eq!(repo.inserts, 2);
    assert_eq!(
        repo.updates,
        vec![
            (ids[1], PlayerField::Score(1)),
            (ids[0], PlayerField::Name("Annie".to_owned())),
        ]
    );
}

#[test]
fn test_custom_roster_size() {
    init_logging();

    for count in [1usize, 2, 3, 6, 8] {
        let names: Vec<String> = (0..count).map(|i| format!("Seat {i}")).collect();
        let mut board = Scoreboard::in_memory(RosterConfig::new(names)).unwrap();
        let ids = ids(&board);
        assert_eq!(ids.len(), count);

        let last = *ids.last().unwrap();
        let update = board.increment(last).unwrap();
        assert!(update.celebrate);
        assert!(update.leaders.contains(&last));
        assert_eq!(board.headline().to_string(), format!("Seat {}", count - 1));
    }
}

#[test]
fn test_empty_roster() {
    let mut board = Scoreboard::in_memory(RosterConfig::new(Vec::<String>::new())).unwrap();

    assert!(board.players().is_empty());
    let update = board.recompute();
    assert!(update.leaders.is_empty());
    assert!(!update.celebrate);
    assert!(matches!(board.increment(PlayerId::new(0)), Err(ScoreError::NotFound(_))));
}

#[test]
fn test_config_from_json() {
    let config = RosterConfig::from_json(
        r#"{ "default_names": ["North", "East", "South", "West"], "max_name_len": 6, "celebration_ms": 2000 }"#,
    )
    .unwrap();
    let mut board = Scoreboard::in_memory(config).unwrap();
    let ids = ids(&board);

    board.rename(ids[0], "Northwest").unwrap();
    assert_eq!(board.players()[0].name(), "Northw");
    assert_eq!(board.celebration().as_millis(), 2000);
}

#[test]
fn test_name_rules_through_scoreboard() {
    let mut board = Scoreboard::in_memory(RosterConfig::default()).unwrap();
    let id = ids(&board)[0];

    assert!(!board.rename(id, "   ").unwrap());
    assert_eq!(board.players()[0].name(), "Player One");

    assert!(board.rename(id, " Bob ").unwrap());
    assert_eq!(board.players()[0].name(), "Bob");

    board.rename(id, "Bartholomew Fitzgerald").unwrap();
    assert_eq!(board.players()[0].name(), "Bartholomew Fitzgera");
    assert!(board.players()[0].name().chars().count() <= 20);
}

#[test]
fn test_full_game_session() {
    init_logging();

    let mut board = Scoreboard::in_memory(RosterConfig::default()).unwrap();
    let ids = ids(&board);
    let mut celebrations = 0;

    // Hands won in order; decrement undoes a mis-tap on Player Three.
    for &(who, up) in &[(0, true), (1, true), (1, true), (2, true), (2, false), (0, true), (3, true)] {
        let update = if up {
            board.increment(ids[who]).unwrap()
        } else {
            board.decrement(ids[who]).unwrap()
        };
        if update.celebrate {
            celebrations += 1;
        }
    }

    // First score, Player Two ties at 1, Player Two leads at 2, Player One ties at 2.
    assert_eq!(celebrations, 4);
    assert_eq!(board.leader_score(), 2);
    assert_eq!(board.headline().to_string(), "Player One\nPlayer Two");

    board.reset_names().unwrap();
    let update = board.reset_scores();
    assert_eq!(update.change, LeaderChange::Cleared);
    assert_eq!(board.headline(), Headline::NoLeader);
}
