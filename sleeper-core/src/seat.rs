use serde::{Deserialize, Serialize};

pub const TOTAL_SEATS: u32 = 30;
pub const SEATS_PER_DECK: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deck {
    Upper,
    Lower,
}

impl Deck {
    /// Seats 1-15 sit on the upper deck, 16-30 on the lower.
    pub fn of(seat_id: u32) -> Self {
        if seat_id <= SEATS_PER_DECK {
            Deck::Upper
        } else {
            Deck::Lower
        }
    }

    pub fn code(&self) -> char {
        match self {
            Deck::Upper => 'U',
            Deck::Lower => 'L',
        }
    }
}

pub fn is_valid_seat_id(seat_id: u32) -> bool {
    (1..=TOTAL_SEATS).contains(&seat_id)
}

/// Deck letter plus the two-digit position within that deck, e.g. `U07`, `L01`.
pub fn seat_label(seat_id: u32) -> String {
    let deck = Deck::of(seat_id);
    let position = match deck {
        Deck::Upper => seat_id,
        Deck::Lower => seat_id - SEATS_PER_DECK,
    };
    format!("{}{:02}", deck.code(), position)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub seat_id: u32,
    pub seat_label: String,
    pub seat_type: String,
    pub is_booked: bool,
}

impl Seat {
    pub fn new(seat_id: u32, is_booked: bool) -> Self {
        Self {
            seat_id,
            seat_label: seat_label(seat_id),
            seat_type: "sleeper".to_string(),
            is_booked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_deck_labels() {
        for seat_id in 1..=15 {
            assert_eq!(seat_label(seat_id), format!("U{:02}", seat_id));
        }
        assert_eq!(seat_label(1), "U01");
        assert_eq!(seat_label(15), "U15");
    }

    #[test]
    fn test_lower_deck_labels() {
        for seat_id in 16..=30 {
            assert_eq!(seat_label(seat_id), format!("L{:02}", seat_id - 15));
        }
        assert_eq!(seat_label(16), "L01");
        assert_eq!(seat_label(30), "L15");
    }

    #[test]
    fn test_seat_id_bounds() {
        assert!(!is_valid_seat_id(0));
        assert!(is_valid_seat_id(1));
        assert!(is_valid_seat_id(30));
        assert!(!is_valid_seat_id(31));
    }

    #[test]
    fn test_seat_serialization() {
        let json = serde_json::to_value(Seat::new(23, true)).unwrap();
        assert_eq!(json["seat_label"], "L08");
        assert_eq!(json["seat_type"], "sleeper");
        assert_eq!(json["is_booked"], true);
    }
}
