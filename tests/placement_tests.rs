use battleship_client::core::{ship_kind_from_name, TOTAL_SHIP_CELLS};
use battleship_client::{Board, BoardError, Cell, Orientation, PlacementPlan, ShipKind};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn ships_go_down_in_fleet_order() {
    let mut board = Board::new();
    let mut plan = PlacementPlan::new();
    assert_eq!(plan.current(), Some(ShipKind::Carrier));

    let err = plan
        .place(&mut board, ShipKind::Destroyer, 0, 0)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfOrder { expected: "carrier" });
    assert_eq!(board, Board::new());

    plan.place(&mut board, ShipKind::Carrier, 0, 0).unwrap();
    assert_eq!(plan.current(), Some(ShipKind::Battleship));
    assert_eq!(plan.remaining().len(), 4);
}

#[test]
fn orientation_is_shared_and_frozen_per_ship() {
    let mut board = Board::new();
    let mut plan = PlacementPlan::new();
    assert_eq!(plan.orientation(), Orientation::Vertical);

    let carrier = plan.place(&mut board, ShipKind::Carrier, 0, 0).unwrap();
    assert_eq!(plan.rotate(), Orientation::Horizontal);
    let battleship = plan.place(&mut board, ShipKind::Battleship, 0, 1).unwrap();

    assert_eq!(carrier.orientation, Orientation::Vertical);
    assert_eq!(battleship.orientation, Orientation::Horizontal);
    assert_eq!(board.cell(4, 0), Some(Cell::ShipOccupied));
    assert_eq!(board.cell(0, 4), Some(Cell::ShipOccupied));
}

#[test]
fn rejected_placement_keeps_the_plan() {
    let mut board = Board::new();
    let mut plan = PlacementPlan::new();
    plan.place(&mut board, ShipKind::Carrier, 0, 0).unwrap();
    plan.rotate();

    let err = plan
        .place(&mut board, ShipKind::Battleship, 2, 0)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
    assert_eq!(plan.current(), Some(ShipKind::Battleship));
    assert_eq!(board.count(Cell::ShipOccupied), 5);
}

#[test]
fn auto_place_finishes_a_partial_fleet() {
    let mut board = Board::new();
    let mut plan = PlacementPlan::new();
    plan.place(&mut board, ShipKind::Carrier, 5, 5).unwrap();

    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(plan.auto_place(&mut board, &mut rng), Ok(4));
    assert!(plan.is_complete());
    assert_eq!(plan.current(), None);
    assert_eq!(board.count(Cell::ShipOccupied), TOTAL_SHIP_CELLS);
    assert_eq!(
        plan.place(&mut board, ShipKind::Destroyer, 0, 0),
        Err(BoardError::PlacementComplete)
    );
}

#[test]
fn ship_names_match_the_wire() {
    assert_eq!(ship_kind_from_name("carrier"), Some(ShipKind::Carrier));
    assert_eq!(ship_kind_from_name("SUBMARINE"), Some(ShipKind::Submarine));
    assert_eq!(ship_kind_from_name("rowboat"), None);
    assert_eq!(ShipKind::Cruiser.size(), 3);
    assert_eq!(Orientation::from_wire_flag(1), Orientation::Horizontal);
    assert_eq!(Orientation::Vertical.wire_flag(), 0);
}
