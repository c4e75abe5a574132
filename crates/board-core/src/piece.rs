//! Piece and occupant representation.

use crate::Side;

/// The movement archetypes present on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Archetype {
    /// Jumps to a fixed set of L-shaped offsets; never blocked.
    Leaper = 0,
    /// Slides any distance along a diagonal.
    DiagonalSlider = 1,
    /// Slides any distance along a rank or file.
    OrthogonalSlider = 2,
    /// Never moves; only occupies its square.
    Blocker = 3,
}

impl Archetype {
    /// All archetypes in order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Leaper,
        Archetype::DiagonalSlider,
        Archetype::OrthogonalSlider,
        Archetype::Blocker,
    ];

    /// Returns the index of this archetype (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if this archetype slides along lines.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Archetype::DiagonalSlider | Archetype::OrthogonalSlider)
    }

    /// Returns true if pieces of this archetype can ever move.
    #[inline]
    pub const fn is_mover(self) -> bool {
        !matches!(self, Archetype::Blocker)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::Leaper => "Leaper",
            Archetype::DiagonalSlider => "Diagonal slider",
            Archetype::OrthogonalSlider => "Orthogonal slider",
            Archetype::Blocker => "Blocker",
        };
        write!(f, "{}", name)
    }
}

/// A piece: an archetype belonging to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub archetype: Archetype,
    pub side: Side,
}

impl Piece {
    /// The opponent's leaper (`P`).
    pub const OPPONENT_LEAPER: Piece = Piece::new(Archetype::Leaper, Side::Opponent);
    /// The player's leaper (`K`).
    pub const PLAYER_LEAPER: Piece = Piece::new(Archetype::Leaper, Side::Player);
    /// The player's diagonal slider (`B`).
    pub const PLAYER_DIAGONAL: Piece = Piece::new(Archetype::DiagonalSlider, Side::Player);
    /// The player's orthogonal slider (`R`).
    pub const PLAYER_ORTHOGONAL: Piece = Piece::new(Archetype::OrthogonalSlider, Side::Player);
    /// A blocked cell (`x`).
    pub const BLOCKER: Piece = Piece::new(Archetype::Blocker, Side::Opponent);

    #[inline]
    pub const fn new(archetype: Archetype, side: Side) -> Self {
        Piece { archetype, side }
    }
}

/// What stands on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

impl Occupant {
    /// Code the host renders for an empty cell.
    pub const EMPTY_CODE: &'static str = "0";
    /// Code the host renders for a blocked cell.
    pub const BLOCKER_CODE: &'static str = "x";

    /// Translates a cell's occupant code into an occupant.
    ///
    /// Codes are case-sensitive. Returns `None` for codes outside the
    /// fixed table; callers treat those squares as empty.
    pub fn from_code(code: &str) -> Option<Self> {
        let piece = match code {
            "0" => return Some(Occupant::Empty),
            "P" => Piece::OPPONENT_LEAPER,
            "K" => Piece::PLAYER_LEAPER,
            "B" => Piece::PLAYER_DIAGONAL,
            "R" => Piece::PLAYER_ORTHOGONAL,
            "x" => Piece::BLOCKER,
            _ => return None,
        };
        Some(Occupant::Piece(piece))
    }

    /// Returns the occupant code the host would render for this occupant,
    /// or `None` for combinations the host never renders.
    pub const fn to_code(self) -> Option<&'static str> {
        match self {
            Occupant::Empty => Some(Self::EMPTY_CODE),
            Occupant::Piece(p) => match (p.archetype, p.side) {
                (Archetype::Leaper, Side::Opponent) => Some("P"),
                (Archetype::Leaper, Side::Player) => Some("K"),
                (Archetype::DiagonalSlider, Side::Player) => Some("B"),
                (Archetype::OrthogonalSlider, Side::Player) => Some("R"),
                (Archetype::Blocker, _) => Some(Self::BLOCKER_CODE),
                _ => None,
            },
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(p) => Some(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table() {
        assert_eq!(Occupant::from_code("0"), Some(Occupant::Empty));
        assert_eq!(
            Occupant::from_code("P"),
            Some(Occupant::Piece(Piece::new(Archetype::Leaper, Side::Opponent)))
        );
        assert_eq!(
            Occupant::from_code("K"),
            Some(Occupant::Piece(Piece::new(Archetype::Leaper, Side::Player)))
        );
        assert_eq!(
            Occupant::from_code("B"),
            Some(Occupant::Piece(Piece::new(Archetype::DiagonalSlider, Side::Player)))
        );
        assert_eq!(
            Occupant::from_code("R"),
            Some(Occupant::Piece(Piece::new(Archetype::OrthogonalSlider, Side::Player)))
        );
        assert_eq!(
            Occupant::from_code("x"),
            Some(Occupant::Piece(Piece::new(Archetype::Blocker, Side::Opponent)))
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(Occupant::from_code("X"), None);
        assert_eq!(Occupant::from_code("k"), None);
        assert_eq!(Occupant::from_code(""), None);
        assert_eq!(Occupant::from_code("Q"), None);
    }

    #[test]
    fn to_code_inverts_from_code() {
        for code in ["0", "P", "K", "B", "R", "x"] {
            let occupant = Occupant::from_code(code).unwrap();
            assert_eq!(occupant.to_code(), Some(code));
        }
        let foreign = Occupant::Piece(Piece::new(Archetype::DiagonalSlider, Side::Opponent));
        assert_eq!(foreign.to_code(), None);
    }

    #[test]
    fn archetype_flags() {
        assert!(Archetype::Leaper.is_mover());
        assert!(!Archetype::Leaper.is_slider());
        assert!(Archetype::DiagonalSlider.is_slider());
        assert!(Archetype::OrthogonalSlider.is_slider());
        assert!(!Archetype::Blocker.is_mover());
        assert!(!Archetype::Blocker.is_slider());
    }
}
