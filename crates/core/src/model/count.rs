use crate::model::card::Rank;

/// Hi-Lo point values: 2-6 count +1, 7-9 count 0, tens and aces count -1.
pub const HI_LO_VALUES: [(Rank, i32); 13] = [
    (Rank::Two, 1),
    (Rank::Three, 1),
    (Rank::Four, 1),
    (Rank::Five, 1),
    (Rank::Six, 1),
    (Rank::Seven, 0),
    (Rank::Eight, 0),
    (Rank::Nine, 0),
    (Rank::Ten, -1),
    (Rank::Jack, -1),
    (Rank::Queen, -1),
    (Rank::King, -1),
    (Rank::Ace, -1),
];

/// Returns the Hi-Lo value for a rank.
#[must_use]
pub const fn hi_lo_value(rank: Rank) -> i32 {
    HI_LO_VALUES[rank as usize].1
}
