//! Arena of ships owned by a board. Cells refer to ships by [`ShipId`].

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::common::BoardError;
use crate::config::NUM_SHIPS;
use crate::ship::{Ship, ShipId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Empty fleet with room for every slot reserved up front.
    pub fn new() -> Result<Self, BoardError> {
        let mut ships = Vec::new();
        ships.try_reserve_exact(NUM_SHIPS)?;
        Ok(Fleet { ships })
    }

    /// Add a ship and hand back its id.
    pub fn push(&mut self, ship: Ship) -> Result<ShipId, BoardError> {
        if self.is_complete() {
            return Err(BoardError::FleetFull);
        }
        let id = ShipId(self.ships.len());
        self.ships.push(ship);
        Ok(id)
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships.iter().enumerate().map(|(i, s)| (ShipId(i), s))
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// `true` once every fleet slot holds a ship.
    pub fn is_complete(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }

    /// `true` when the fleet is complete and no ship is afloat.
    pub fn all_sunk(&self) -> bool {
        self.is_complete() && self.ships.iter().all(|s| !s.is_alive())
    }

    /// Number of ships still afloat.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| s.is_alive()).count()
    }

    pub(crate) fn clear(&mut self) {
        self.ships.clear();
    }
}

impl Index<ShipId> for Fleet {
    type Output = Ship;

    fn index(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }
}

impl IndexMut<ShipId> for Fleet {
    fn index_mut(&mut self, id: ShipId) -> &mut Ship {
        &mut self.ships[id.0]
    }
}
