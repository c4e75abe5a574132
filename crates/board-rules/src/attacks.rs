//! Reachability tables for the leaper and ray walks for the sliders.

use crate::Bitboard;
use board_core::Square;

/// The leaper's displacement set as (file_delta, rank_delta) pairs.
pub const LEAPER_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// Diagonal ray directions.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Orthogonal ray directions.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Precomputed leaper reach tables.
const LEAPER_ATTACKS: [Bitboard; 64] = compute_leaper_attacks();

/// Returns every square a leaper on `sq` reaches, regardless of occupancy.
#[inline]
pub fn leaper_attacks(sq: Square) -> Bitboard {
    LEAPER_ATTACKS[sq.index() as usize]
}

/// Returns the squares a diagonal slider on `sq` reaches given `occupied`.
///
/// Each ray stops at the first occupied square, which is included.
pub fn diagonal_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &DIAGONAL_DIRECTIONS)
}

/// Returns the squares an orthogonal slider on `sq` reaches given `occupied`.
///
/// Each ray stops at the first occupied square, which is included.
pub fn orthogonal_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &ORTHOGONAL_DIRECTIONS)
}

fn slide(from: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(df, dr) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(df, dr) {
            attacks.set(next);
            if occupied.contains(next) {
                break;
            }
            cursor = next;
        }
    }
    attacks
}

/// Computes leaper reach for all squares at compile time.
const fn compute_leaper_attacks() -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut idx = 0u8;

    while idx < 64 {
        let sq = match Square::from_index(idx) {
            Some(sq) => sq,
            None => unreachable!(),
        };
        let mut bb = 0u64;
        let mut i = 0;
        while i < LEAPER_OFFSETS.len() {
            let (df, dr) = LEAPER_OFFSETS[i];
            if let Some(target) = sq.offset(df, dr) {
                bb |= target.bitboard();
            }
            i += 1;
        }
        attacks[idx as usize] = Bitboard(bb);
        idx += 1;
    }

    attacks
}
