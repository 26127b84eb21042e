use super::*;
use crate::net::types::{Coord, GameResponse};

fn snapshot() -> GameResponse {
    GameResponse {
        field: vec![vec![None, None], vec![None, None]],
        possible_coords: vec![Coord { x: 0, y: 0 }, Coord { x: 1, y: 1 }],
        current_player: "p1".to_owned(),
        player_one_name: "p1".to_owned(),
        player_two_name: "p2".to_owned(),
        game_type: "classic".to_owned(),
        winner: None,
    }
}

/// Deterministic random source that always picks the given index,
/// clamped to the list.
struct FixedRandom(usize);

impl RandomSource for FixedRandom {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.min(len - 1))
    }
}

// =============================================================
// coord_key
// =============================================================

#[test]
fn coord_key_distinct_for_distinct_pairs() {
    let mut seen = HashSet::new();
    for x in 0..10 {
        for y in 0..10 {
            assert!(seen.insert(coord_key(x, y)), "collision at ({x}, {y})");
        }
    }
}

#[test]
fn coord_key_delimits_components() {
    // Concatenation without delimiters would make these collide.
    assert_ne!(coord_key(1, 12), coord_key(11, 2));
}

#[test]
fn coord_key_stable_across_calls() {
    assert_eq!(coord_key(3, 7), coord_key(3, 7));
}

// =============================================================
// legal_targets
// =============================================================

#[test]
fn legal_targets_contains_exactly_listed_coords() {
    let set = legal_targets(&snapshot().possible_coords);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&coord_key(0, 0)));
    assert!(set.contains(&coord_key(1, 1)));
    assert!(!set.contains(&coord_key(1, 0)));
}

// =============================================================
// guard_move
// =============================================================

#[test]
fn guard_forwards_legal_coordinate_with_snapshot_attribution() {
    let game = snapshot();
    let legal = legal_targets(&game.possible_coords);
    let request = guard_move(&game, &legal, Coord { x: 0, y: 0 }).expect("legal move");
    assert_eq!(request.x, 0);
    assert_eq!(request.y, 0);
    assert_eq!(request.player, "p1");
    assert_eq!(request.game_type, "classic");
}

#[test]
fn guard_drops_illegal_coordinate() {
    let game = snapshot();
    let legal = legal_targets(&game.possible_coords);
    assert!(guard_move(&game, &legal, Coord { x: 1, y: 0 }).is_none());
}

#[test]
fn guard_uses_current_player_not_player_one() {
    let mut game = snapshot();
    game.current_player = "machine".to_owned();
    let legal = legal_targets(&game.possible_coords);
    let request = guard_move(&game, &legal, Coord { x: 1, y: 1 }).expect("legal move");
    assert_eq!(request.player, "machine");
}

// =============================================================
// random_move
// =============================================================

#[test]
fn random_move_with_empty_list_is_none() {
    let mut game = snapshot();
    game.possible_coords.clear();
    assert!(random_move(&game, &mut FixedRandom(0)).is_none());
}

#[test]
fn random_move_picks_only_legal_coordinates() {
    let game = snapshot();

    let first = random_move(&game, &mut FixedRandom(0)).expect("move");
    assert_eq!((first.x, first.y), (0, 0));

    let second = random_move(&game, &mut FixedRandom(1)).expect("move");
    assert_eq!((second.x, second.y), (1, 1));
}

#[test]
fn random_move_attributes_current_player() {
    let mut game = snapshot();
    game.current_player = "machine".to_owned();
    let request = random_move(&game, &mut FixedRandom(1)).expect("move");
    assert_eq!(request.player, "machine");
    assert_eq!(request.game_type, "classic");
}

// =============================================================
// cell_class
// =============================================================

#[test]
fn empty_cell_without_target_is_empty_and_unavailable() {
    let class = cell_class(None, false, "p1", "p2");
    assert!(class.contains("cell--empty"));
    assert!(class.contains("cell--unavailable"));
}

#[test]
fn empty_legal_target_is_not_unavailable() {
    let class = cell_class(None, true, "p1", "p2");
    assert!(class.contains("cell--empty"));
    assert!(!class.contains("cell--unavailable"));
}

#[test]
fn occupied_cells_get_player_colors() {
    assert!(cell_class(Some("p1"), false, "p1", "p2").contains("cell--red"));
    assert!(cell_class(Some("p2"), false, "p1", "p2").contains("cell--yellow"));
}

#[test]
fn occupied_cell_is_never_unavailable_or_empty() {
    let class = cell_class(Some("p1"), false, "p1", "p2");
    assert!(!class.contains("cell--unavailable"));
    assert!(!class.contains("cell--empty"));
}

#[test]
fn unknown_occupant_gets_base_class_only() {
    assert_eq!(cell_class(Some("spectator"), false, "p1", "p2"), "cell");
}
