use std::cell::RefCell;
use std::collections::HashSet;

use helm_core::WorldView;
use helm_nav::{find_nearest, ring, Cell, EntityHit, Placement, TileWorldView, Vec2};

struct GridWorld {
    entities: Vec<(Cell, &'static str)>,
    visited: RefCell<Vec<Cell>>,
}

impl GridWorld {
    fn with_entities(entities: Vec<(Cell, &'static str)>) -> Self {
        Self {
            entities,
            visited: RefCell::new(Vec::new()),
        }
    }
}

impl WorldView for GridWorld {
    type Agent = u32;
}

impl TileWorldView for GridWorld {
    type Entity = &'static str;

    fn position(&self, _agent: u32) -> Option<Vec2> {
        Some(Vec2::new(0.5, 0.5))
    }

    fn rotation(&self, _agent: u32) -> Option<f32> {
        Some(0.0)
    }

    fn entities_at(&self, cell: Cell, out: &mut Vec<EntityHit<&'static str>>) {
        self.visited.borrow_mut().push(cell);
        for (entity_cell, name) in &self.entities {
            if *entity_cell == cell {
                out.push(EntityHit {
                    entity: *name,
                    kind: (*name).into(),
                    position: cell.center(),
                    placement: Placement::Object,
                });
            }
        }
    }
}

#[test]
fn ring_enumerates_the_chebyshev_perimeter_once() {
    let center = Cell::new(0, 0);
    for radius in 1..=5 {
        let cells: Vec<Cell> = ring(center, radius).collect();
        assert_eq!(cells.len(), (8 * radius) as usize);

        let unique: HashSet<Cell> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len(), "duplicate cell at radius {radius}");

        for cell in cells {
            assert_eq!(cell.chebyshev_distance(center), radius);
        }
    }
}

#[test]
fn ring_of_radius_zero_is_just_the_center() {
    let cells: Vec<Cell> = ring(Cell::new(3, -2), 0).collect();
    assert_eq!(cells, vec![Cell::new(3, -2)]);
}

#[test]
fn ring_is_deterministic_for_the_same_input() {
    let a: Vec<Cell> = ring(Cell::new(7, -1), 4).collect();
    let b: Vec<Cell> = ring(Cell::new(7, -1), 4).collect();
    assert_eq!(a, b);
}

#[test]
fn find_nearest_respects_the_radius_bound() {
    // One pinecone at Chebyshev distance 3 from the origin cell.
    let world = GridWorld::with_entities(vec![(Cell::new(3, 1), "pinecone")]);
    let origin = Vec2::new(0.5, 0.5);

    let hit = find_nearest(&world, origin, 3, |hit| hit.kind == "pinecone");
    assert_eq!(hit.map(|h| h.entity), Some("pinecone"));

    let miss = find_nearest(&world, origin, 2, |hit| hit.kind == "pinecone");
    assert!(miss.is_none());
}

#[test]
fn a_full_scan_never_visits_a_cell_twice() {
    let world = GridWorld::with_entities(vec![]);
    let origin = Vec2::new(10.2, -3.7);

    assert!(find_nearest(&world, origin, 20, |_| true).is_none());

    let visited = world.visited.borrow();
    let unique: HashSet<Cell> = visited.iter().copied().collect();
    assert_eq!(unique.len(), visited.len());
    // 8r cells per ring, radii 1 through 20; the origin cell is never
    // scanned.
    assert_eq!(visited.len(), (1..=20).map(|r| 8 * r).sum::<i32>() as usize);
    assert!(!visited.contains(&Cell::new(10, -4)));
}

#[test]
fn nearer_rings_win_over_farther_ones() {
    let world = GridWorld::with_entities(vec![
        (Cell::new(4, 0), "rock"),
        (Cell::new(1, 1), "rock"),
    ]);
    let hit = find_nearest(&world, Vec2::new(0.5, 0.5), 10, |h| h.kind == "rock")
        .expect("a rock is in range");
    assert_eq!(hit.position, Cell::new(1, 1).center());
}

#[test]
fn kind_predicate_filters_non_matching_entities() {
    let world = GridWorld::with_entities(vec![
        (Cell::new(1, 0), "rock"),
        (Cell::new(2, 2), "pinecone"),
    ]);
    let hit = find_nearest(&world, Vec2::new(0.5, 0.5), 10, |h| h.kind == "pinecone")
        .expect("the pinecone is in range");
    assert_eq!(hit.entity, "pinecone");
}

#[test]
fn tile_hits_snap_their_target_to_the_tile_center() {
    let hit = EntityHit {
        entity: "water",
        kind: "water".into(),
        position: Vec2::new(6.0, 2.0),
        placement: Placement::Tile,
    };
    assert_eq!(hit.target(), Vec2::new(6.5, 2.5));

    let object = EntityHit {
        entity: "rock",
        kind: "rock".into(),
        position: Vec2::new(6.2, 2.9),
        placement: Placement::Object,
    };
    assert_eq!(object.target(), Vec2::new(6.2, 2.9));
}
