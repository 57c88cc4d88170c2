//! Turn resolver tests - the slide-and-merge algorithm over all directions
//! and board sizes, exercised through the public API.

use tui_2048::core::{collect_empty_cells, format_tiles, Tile, Turn};
use tui_2048::types::{Direction, BOARD_SIZES};

fn tile(x: u8, y: u8, rank: u8, seq_id: u32) -> Tile {
    Tile::new(x, y, rank, seq_id)
}

fn tile_at(turn: &Turn, x: u8, y: u8) -> Option<Tile> {
    turn.tiles.iter().copied().find(|t| t.x == x && t.y == y)
}

#[test]
fn test_single_tile_slides_to_each_edge() {
    let tiles = [tile(1, 1, 3, 0)];

    let cases = [
        (Direction::LEFT, (0u8, 1u8)),
        (Direction::RIGHT, (3, 1)),
        (Direction::UP, (1, 0)),
        (Direction::DOWN, (1, 3)),
    ];

    for (dir, expected) in cases {
        let turn = Turn::resolve(&tiles, 4, dir, 1);
        let moved = tile_at(&turn, expected.0, expected.1);
        assert!(
            moved.is_some(),
            "move {}: expected tile at {:?}\n{}",
            dir.as_str(),
            expected,
            format_tiles(4, &turn.tiles)
        );
        assert_eq!(moved.unwrap().seq_id, 0, "slides keep identity");
        assert_eq!(turn.moved_count, 1);
    }
}

#[test]
fn test_noop_leaves_everything_untouched() {
    // Compacted against every edge it can be tested on.
    let tiles = [tile(0, 0, 1, 0), tile(0, 1, 2, 1), tile(0, 2, 3, 2)];
    let turn = Turn::resolve(&tiles, 4, Direction::LEFT, 3);

    assert_eq!(turn.moved_count, 0);
    assert_eq!(turn.score_change, 0);
    assert_eq!(turn.seq_id_change, 0);
    assert_eq!(turn.tiles.len(), tiles.len());
    for t in &tiles {
        assert_eq!(tile_at(&turn, t.x, t.y), Some(*t));
    }
}

#[test]
fn test_score_change_is_sum_of_merge_values() {
    // Row 0 merges two 2s (scores 4), row 1 merges two 8s (scores 16).
    let tiles = [
        tile(0, 0, 1, 0),
        tile(2, 0, 1, 1),
        tile(1, 1, 3, 2),
        tile(3, 1, 3, 3),
    ];
    let turn = Turn::resolve(&tiles, 4, Direction::LEFT, 4);

    assert_eq!(turn.score_change, 4 + 16);
    assert_eq!(turn.seq_id_change, 2);
}

#[test]
fn test_triplet_merges_leading_pair_only() {
    // Three equal tiles: the pair nearest the target edge merges, the
    // trailing tile slides in behind without chaining.
    let tiles = [tile(0, 2, 4, 0), tile(1, 2, 4, 1), tile(3, 2, 4, 2)];
    let turn = Turn::resolve(&tiles, 4, Direction::LEFT, 3);

    assert_eq!(turn.tiles.len(), 2);
    assert_eq!(tile_at(&turn, 0, 2).unwrap().rank, 5);
    assert_eq!(tile_at(&turn, 1, 2).unwrap().rank, 4);
    assert_eq!(turn.seq_id_change, 1);
}

#[test]
fn test_all_board_sizes_resolve_in_bounds() {
    for &size in BOARD_SIZES.iter() {
        // One tile per row at the far edge, plus a pair in row 0.
        let mut tiles = vec![tile(0, 0, 1, 0), tile(size - 1, 0, 1, 1)];
        for y in 1..size {
            tiles.push(tile(size - 1, y, 2, 1 + y as u32));
        }

        for dir in Direction::all() {
            let turn = Turn::resolve(&tiles, size, dir, 100);
            for t in &turn.tiles {
                assert!(
                    t.x < size && t.y < size,
                    "size {}: tile out of bounds after {}",
                    size,
                    dir.as_str()
                );
            }
            let empty = collect_empty_cells(&turn.tiles, size);
            assert_eq!(
                empty.len() + turn.tiles.len(),
                (size as usize) * (size as usize)
            );
        }
    }
}

#[test]
fn test_coordinates_stay_unique_after_resolution() {
    // A dense board with several merge opportunities in both axes.
    let mut tiles = Vec::new();
    let mut seq = 0;
    for y in 0u8..4 {
        for x in 0u8..4 {
            if (x + y) % 3 != 0 {
                tiles.push(tile(x, y, 1 + (y % 2), seq));
                seq += 1;
            }
        }
    }

    for dir in Direction::all() {
        let turn = Turn::resolve(&tiles, 4, dir, seq);
        for (i, a) in turn.tiles.iter().enumerate() {
            for b in turn.tiles.iter().skip(i + 1) {
                assert!(
                    (a.x, a.y) != (b.x, b.y),
                    "duplicate cell after {}:\n{}",
                    dir.as_str(),
                    format_tiles(4, &turn.tiles)
                );
            }
        }
    }
}

#[test]
fn test_opposite_moves_commute_on_single_tiles() {
    // With no merges possible, left-then-right parks the tile at the right
    // edge regardless of where it started.
    let tiles = [tile(2, 1, 6, 0)];
    let left = Turn::resolve(&tiles, 4, Direction::LEFT, 1);
    let right = Turn::resolve(&left.tiles, 4, Direction::RIGHT, 1);
    assert!(tile_at(&right, 3, 1).is_some());
}
