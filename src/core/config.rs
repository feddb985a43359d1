use super::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// The fleet in the order ships are placed.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Convert a wire ship name (`"carrier"`, `"destroyer"`, ...) to its kind.
/// Matching is case-insensitive; returns `None` for names outside the fleet.
pub fn ship_kind_from_name(name: &str) -> Option<ShipKind> {
    FLEET
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}
