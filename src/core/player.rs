//! Seats and per-seat storage.
//!
//! Seats 0 and 2 play against seats 1 and 3. Turn order runs 0, 1, 2, 3.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;

/// Number of seats at a Tichu table.
pub const SEATS: usize = 4;

/// Seat identifier (0-3).
///
/// Seats are numbered clockwise; play passes from seat `n` to seat `n + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// # Panics
    ///
    /// Panics if `id` is not a valid seat. Use [`PlayerId::try_new`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < SEATS, "Seat must be 0-3");
        Self(id)
    }

    /// Checked constructor for seat numbers from outside the engine.
    pub fn try_new(id: u8) -> Result<Self, GameError> {
        if (id as usize) < SEATS {
            Ok(Self(id))
        } else {
            Err(GameError::InvalidSeat(id))
        }
    }

    /// Raw seat number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all four seats in turn order.
    ///
    /// ```
    /// use rust_tichu::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEATS as u8).map(PlayerId)
    }

    /// The seat `offset` places clockwise from this one.
    #[must_use]
    pub const fn offset(self, offset: u8) -> Self {
        Self((self.0 + offset % SEATS as u8) % SEATS as u8)
    }

    /// The next seat in turn order.
    #[must_use]
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// The partner sitting opposite.
    #[must_use]
    pub const fn teammate(self) -> Self {
        self.offset(2)
    }

    /// The two opponents, lower seat first.
    #[must_use]
    pub const fn opponents(self) -> [PlayerId; 2] {
        if self.0 % 2 == 0 {
            [PlayerId(1), PlayerId(3)]
        } else {
            [PlayerId(0), PlayerId(2)]
        }
    }

    /// Team index: 0 for seats 0/2, 1 for seats 1/3.
    #[must_use]
    pub const fn team(self) -> usize {
        (self.0 % 2) as usize
    }

    /// Same team, including the seat itself.
    #[must_use]
    pub const fn is_partner_of(self, other: PlayerId) -> bool {
        self.0 % 2 == other.0 % 2
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_new(id)
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use rust_tichu::core::{PlayerId, PlayerMap};
///
/// let mut ledger: PlayerMap<i32> = PlayerMap::with_value(0);
/// ledger[PlayerId::new(1)] -= 100;
/// assert_eq!(ledger.iter().map(|(_, v)| v).sum::<i32>(), -100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn new(init: impl Fn(PlayerId) -> T) -> Self {
        Self {
            seats: std::array::from_fn(|i| init(PlayerId(i as u8))),
        }
    }

    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// Seats in turn order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.seats.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::new(3).to_string(), "Player 3");
        assert_eq!(PlayerId::new(3).index(), 3);
    }

    #[test]
    fn test_try_new_rejects_fifth_seat() {
        assert_eq!(PlayerId::try_new(2), Ok(PlayerId::new(2)));
        assert_eq!(PlayerId::try_new(4), Err(GameError::InvalidSeat(4)));
    }

    #[test]
    fn test_seat_rotation() {
        assert_eq!(PlayerId::new(3).next(), PlayerId::new(0));
        assert_eq!(PlayerId::new(1).offset(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).offset(255), PlayerId::new(2));
        assert_eq!(PlayerId::new(0).teammate(), PlayerId::new(2));
        assert_eq!(PlayerId::new(3).teammate(), PlayerId::new(1));
    }

    #[test]
    fn test_teams() {
        assert_eq!(PlayerId::new(0).opponents(), [PlayerId::new(1), PlayerId::new(3)]);
        assert_eq!(PlayerId::new(3).opponents(), [PlayerId::new(0), PlayerId::new(2)]);
        assert!(PlayerId::new(1).is_partner_of(PlayerId::new(3)));
        assert!(!PlayerId::new(1).is_partner_of(PlayerId::new(2)));
        assert_eq!(PlayerId::new(2).team(), 0);
        assert_eq!(PlayerId::new(1).team(), 1);
    }

    #[test]
    fn test_player_map_by_seat() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::new(3)], 30);

        map[PlayerId::new(0)] = 7;
        *map.get_mut(PlayerId::new(1)) += 5;
        let values: Vec<_> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [7, 15, 20, 30]);
        assert_eq!(map.iter().last(), Some((PlayerId::new(3), &30)));
    }

    #[test]
    fn test_player_map_json() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 - 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"seats":[-1,0,1,2]}"#);
        assert_eq!(serde_json::from_str::<PlayerMap<i32>>(&json).unwrap(), map);
    }

    #[test]
    fn test_player_id_json_checks_seat() {
        assert_eq!(serde_json::to_string(&PlayerId::new(2)).unwrap(), "2");
        assert_eq!(serde_json::from_str::<PlayerId>("3").unwrap(), PlayerId::new(3));
        assert!(serde_json::from_str::<PlayerId>("7").is_err());
        assert_eq!(PlayerId::new(1).value(), 1);
    }

    #[test]
    #[should_panic(expected = "Seat must be 0-3")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(7);
    }
}
