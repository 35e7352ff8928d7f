use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};

/// Represents a kind of piece in the game.
///
/// | Kind | Glyph | Movement | Promotes To |
/// |------|-------|----------|-------------|
/// | Maguro (まぐろ) | ま | 1 step any direction | - |
/// | Inada (いなだ) | い | 1 step forward | Buri |
/// | Buri (ぶり) | ぶ | 1 step forward, diagonally forward, sideways or straight back | - |
/// | Tako (たこ) | た | 1 step diagonal | - |
/// | Karei (かれい) | か | 1 step orthogonal | - |
///
/// Maguro is the game's most valuable piece: capturing it wins, and keeping
/// it alive in enemy territory for a full turn wins as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Maguro,
    Inada,
    Buri,
    Tako,
    Karei,
}

impl PieceType {
    /// Creates a new instance of `PieceType` from its notation glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::PieceType;
    ///
    /// assert_eq!(Some(PieceType::Maguro), PieceType::from_glyph('ま'));
    /// assert_eq!(None, PieceType::from_glyph('M'));
    /// ```
    pub fn from_glyph(c: char) -> Option<PieceType> {
        Some(match c {
            'ま' => PieceType::Maguro,
            'い' => PieceType::Inada,
            'ぶ' => PieceType::Buri,
            'た' => PieceType::Tako,
            'か' => PieceType::Karei,
            _ => return None,
        })
    }

    /// Returns the glyph used in move notation.
    pub fn glyph(self) -> char {
        match self {
            PieceType::Maguro => 'ま',
            PieceType::Inada => 'い',
            PieceType::Buri => 'ぶ',
            PieceType::Tako => 'た',
            PieceType::Karei => 'か',
        }
    }

    /// Returns the letter used in the position setup notation.
    ///
    /// The letter is uppercase; the setup notation lowercases it for the
    /// second player.
    pub fn setup_char(self) -> char {
        match self {
            PieceType::Maguro => 'M',
            PieceType::Inada => 'I',
            PieceType::Buri => 'B',
            PieceType::Tako => 'T',
            PieceType::Karei => 'K',
        }
    }

    /// Creates a new instance of `PieceType` from its setup letter,
    /// ignoring case.
    pub fn from_setup_char(c: char) -> Option<PieceType> {
        Some(match c.to_ascii_uppercase() {
            'M' => PieceType::Maguro,
            'I' => PieceType::Inada,
            'B' => PieceType::Buri,
            'T' => PieceType::Tako,
            'K' => PieceType::Karei,
            _ => return None,
        })
    }

    /// Returns the full Japanese name of this piece.
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Maguro => "まぐろ",
            PieceType::Inada => "いなだ",
            PieceType::Buri => "ぶり",
            PieceType::Tako => "たこ",
            PieceType::Karei => "かれい",
        }
    }

    /// Returns an iterator over all piece types.
    pub fn iter() -> PieceTypeIter {
        PieceTypeIter { current: Some(PieceType::Maguro) }
    }

    /// Returns the promoted version of this piece type, if it can promote.
    pub fn promote(self) -> Option<PieceType> {
        match self {
            PieceType::Inada => Some(PieceType::Buri),
            _ => None,
        }
    }

    /// Returns the unpromoted version of this piece type, if it is promoted.
    pub fn unpromote(self) -> Option<PieceType> {
        match self {
            PieceType::Buri => Some(PieceType::Inada),
            _ => None,
        }
    }

    /// Returns the kind a captured piece of this type turns into in hand.
    pub fn captured_as(self) -> PieceType {
        self.unpromote().unwrap_or(self)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// This struct is created by the [`PieceType::iter`] method.
pub struct PieceTypeIter {
    current: Option<PieceType>,
}

impl iter::Iterator for PieceTypeIter {
    type Item = PieceType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = match current {
            PieceType::Maguro => Some(PieceType::Inada),
            PieceType::Inada => Some(PieceType::Buri),
            PieceType::Buri => Some(PieceType::Tako),
            PieceType::Tako => Some(PieceType::Karei),
            PieceType::Karei => None,
        };

        Some(current)
    }
}
