use battleship_client::{
    can_place, validate, AttackOutcome, Board, BoardError, Cell, Orientation, ShipKind,
    ShipPlacement, BOARD_SIZE,
};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(board.cell(0, 0), Some(Cell::Empty));
    assert_eq!(board.cell(BOARD_SIZE, 0), None);
}

#[test]
fn carrier_vertical_blocks_battleship_horizontal() {
    let mut board = Board::new();
    let carrier = ShipPlacement::new(ShipKind::Carrier, 0, 0, Orientation::Vertical);
    assert!(can_place(&board, &carrier));
    board.place(&carrier);
    for r in 0..5 {
        assert_eq!(board.cell(r, 0), Some(Cell::ShipOccupied));
    }
    assert_eq!(board.cell(5, 0), Some(Cell::Empty));

    let battleship = ShipPlacement::new(ShipKind::Battleship, 2, 0, Orientation::Horizontal);
    assert!(!can_place(&board, &battleship));
    assert_eq!(validate(&board, &battleship), Err(BoardError::ShipOverlaps));
}

#[test]
fn span_leaving_the_grid_is_rejected() {
    let board = Board::new();
    let p = ShipPlacement::new(ShipKind::Carrier, 6, 0, Orientation::Vertical);
    assert_eq!(validate(&board, &p), Err(BoardError::ShipOutOfBounds));
    let p = ShipPlacement::new(ShipKind::Destroyer, 0, 9, Orientation::Horizontal);
    assert_eq!(validate(&board, &p), Err(BoardError::ShipOutOfBounds));
    let p = ShipPlacement::new(ShipKind::Destroyer, 0, 8, Orientation::Horizontal);
    assert!(can_place(&board, &p));
}

#[test]
fn attacked_cells_cannot_host_ships() {
    let mut board = Board::new();
    board.mark_attack(4, 4, AttackOutcome::Miss).unwrap();
    let p = ShipPlacement::new(ShipKind::Cruiser, 4, 2, Orientation::Horizontal);
    assert!(!can_place(&board, &p));
}

#[test]
fn mark_attack_is_monotonic() {
    let mut board = Board::new();
    board.place(&ShipPlacement::new(
        ShipKind::Destroyer,
        3,
        4,
        Orientation::Vertical,
    ));
    assert_eq!(board.mark_attack(3, 4, AttackOutcome::Hit), Ok(Cell::Hit));
    assert_eq!(board.mark_attack(4, 4, AttackOutcome::Sunk), Ok(Cell::Hit));
    assert_eq!(board.mark_attack(0, 0, AttackOutcome::Miss), Ok(Cell::Miss));

    assert_eq!(
        board.mark_attack(3, 4, AttackOutcome::Miss),
        Err(BoardError::AlreadyAttacked)
    );
    assert_eq!(board.cell(3, 4), Some(Cell::Hit));
    assert!(board.is_attacked(0, 0));
    assert!(!board.is_attacked(9, 9));
}

#[test]
fn mark_attack_off_board() {
    let mut board = Board::new();
    assert_eq!(
        board.mark_attack(10, 0, AttackOutcome::Miss),
        Err(BoardError::InvalidCoordinate { row: 10, col: 0 })
    );
}

#[test]
fn clear_resets_everything() {
    let mut board = Board::new();
    board.place(&ShipPlacement::new(
        ShipKind::Battleship,
        1,
        1,
        Orientation::Horizontal,
    ));
    board.mark_attack(9, 9, AttackOutcome::Miss).unwrap();
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn ship_cells_and_contains() {
    let p = ShipPlacement::new(ShipKind::Cruiser, 2, 3, Orientation::Horizontal);
    let cells: Vec<_> = p.cells().collect();
    assert_eq!(cells, vec![(2, 3), (2, 4), (2, 5)]);
    assert!(p.contains(2, 5));
    assert!(!p.contains(3, 3));
}

#[test]
fn anchor_near_usize_max_does_not_overflow() {
    let far = ShipPlacement::new(ShipKind::Cruiser, usize::MAX - 1, 0, Orientation::Vertical);
    assert_eq!(far.cells().collect::<Vec<_>>(), vec![(usize::MAX - 1, 0), (usize::MAX, 0)]);
    assert!(!far.in_bounds());
    assert!(!far.contains(0, 0));

    let mut board = Board::new();
    board.place(&far);
    board.place(&ShipPlacement::new(
        ShipKind::Carrier,
        3,
        usize::MAX,
        Orientation::Horizontal,
    ));
    assert_eq!(board, Board::new());
    assert_eq!(validate(&board, &far), Err(BoardError::ShipOutOfBounds));
}
