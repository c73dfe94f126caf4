use battleships::{BoardError, Fleet, HitOutcome, Orientation, Placement, Ship, ShipType, FLEET};

#[test]
fn test_new_ship_is_undamaged() {
    let ship = Ship::new(ShipType::new("Test", 3));
    assert_eq!(ship.hits(), 0);
    assert_eq!(ship.size(), 3);
    assert!(ship.is_alive());
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert_eq!(ship.register_hit(), HitOutcome::Hit);
    assert!(ship.is_alive());
    assert_eq!(ship.register_hit(), HitOutcome::Sunk);
    assert!(!ship.is_alive());
    assert_eq!(ship.hits(), 2);
}

#[test]
fn test_register_hit_saturates() {
    let mut ship = Ship::new(ShipType::new("Test", 1));
    assert_eq!(ship.register_hit(), HitOutcome::Sunk);
    assert_eq!(ship.register_hit(), HitOutcome::Sunk);
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_alive());
}

#[test]
fn test_placement_cells_and_contains() {
    let p = Placement::new(0, 0, Orientation::Vertical, 4);
    let cells: Vec<_> = p.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (r, c) in cells {
        assert!(p.contains(r, c));
    }
    assert!(!p.contains(4, 0));
    assert!(!p.contains(0, 1));

    let h = Placement::new(2, 1, Orientation::Horizontal, 3);
    assert_eq!(h.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_placement_fits() {
    assert_eq!(Placement::new(0, 0, Orientation::Horizontal, 5).fits(5), Ok(()));
    assert_eq!(
        Placement::new(0, 1, Orientation::Horizontal, 5).fits(5),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::new(3, 4, Orientation::Vertical, 3).fits(5),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::new(0, 0, Orientation::Vertical, 0).fits(5),
        Err(BoardError::InvalidShipLength)
    );
}

#[test]
fn test_fleet_capacity_and_sunk_tracking() {
    let mut fleet = Fleet::new().unwrap();
    assert!(fleet.is_empty());
    let mut ids = Vec::new();
    for def in FLEET {
        ids.push(fleet.push(Ship::new(def)).unwrap());
    }
    assert!(fleet.is_complete());
    assert_eq!(fleet.push(Ship::new(FLEET[0])), Err(BoardError::FleetFull));
    assert_eq!(fleet.afloat(), 5);
    assert!(!fleet.all_sunk());

    for id in &ids {
        while fleet[*id].register_hit() == HitOutcome::Hit {}
    }
    assert_eq!(fleet.afloat(), 0);
    assert!(fleet.all_sunk());
    assert_eq!(fleet.get(ids[2]).map(|s| s.name()), Some("Cruiser"));
}

#[test]
fn test_incomplete_fleet_is_never_all_sunk() {
    let mut fleet = Fleet::new().unwrap();
    let id = fleet.push(Ship::new(FLEET[4])).unwrap();
    fleet[id].register_hit();
    fleet[id].register_hit();
    assert_eq!(fleet.afloat(), 0);
    assert!(!fleet.all_sunk());
}
