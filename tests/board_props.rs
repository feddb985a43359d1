use battleship_client::core::TOTAL_SHIP_CELLS;
use battleship_client::{
    can_place, random_placement, Board, Cell, Orientation, PlacementPlan, ShipKind,
    ShipPlacement, BOARD_SIZE, FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn kind() -> impl Strategy<Value = ShipKind> {
    prop::sample::select(FLEET.to_vec())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Vertical), Just(Orientation::Horizontal)]
}

fn placement() -> impl Strategy<Value = ShipPlacement> {
    (kind(), 0..BOARD_SIZE + 3, 0..BOARD_SIZE + 3, orientation())
        .prop_map(|(kind, row, col, o)| ShipPlacement::new(kind, row, col, o))
}

fn sizes_total(plan: &PlacementPlan) -> usize {
    plan.placements().map(|p| p.kind.size()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn empty_board_accepts_exactly_in_bounds_spans(p in placement()) {
        let board = Board::new();
        let inside = p.cells().all(|(r, c)| r < BOARD_SIZE && c < BOARD_SIZE);
        prop_assert_eq!(can_place(&board, &p), inside);
    }

    #[test]
    fn overlapping_spans_are_rejected(first in placement(), second in placement()) {
        prop_assume!(first.in_bounds());
        let mut board = Board::new();
        board.place(&first);
        if second.cells().any(|(r, c)| first.contains(r, c)) {
            prop_assert!(!can_place(&board, &second));
        }
    }

    #[test]
    fn auto_placed_fleet_is_complete_and_disjoint(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut plan = PlacementPlan::new();
        plan.auto_place(&mut board, &mut rng).unwrap();

        prop_assert!(plan.is_complete());
        let mut sizes: Vec<usize> = plan.placements().map(|p| p.kind.size()).collect();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![2, 3, 3, 4, 5]);
        prop_assert_eq!(board.count(Cell::ShipOccupied), TOTAL_SHIP_CELLS);
        prop_assert_eq!(sizes_total(&plan), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn random_placement_is_always_legal(seed in any::<u64>(), kind in kind()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new();
        let p = random_placement(&board, kind, &mut rng).unwrap();
        prop_assert!(p.in_bounds());
        prop_assert_eq!(p.kind, kind);
    }
}
