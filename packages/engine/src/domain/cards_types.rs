//! Core card types for the 40-card Italian deck: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Denari,
    Coppe,
    Bastoni,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Denari, Suit::Coppe, Suit::Bastoni, Suit::Spade];
}

/// Rank of the Italian deck: Ace through 7, then Fante (8),
/// Cavallo (9), Re (10). There are no ranks 11-13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Asso,
    Due,
    Tre,
    Quattro,
    Cinque,
    Sei,
    Sette,
    Fante,
    Cavallo,
    Re,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Asso,
        Rank::Due,
        Rank::Tre,
        Rank::Quattro,
        Rank::Cinque,
        Rank::Sei,
        Rank::Sette,
        Rank::Fante,
        Rank::Cavallo,
        Rank::Re,
    ];

    /// Numeric value used for capture arithmetic (1..=10).
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Rank::Asso => 1,
            Rank::Due => 2,
            Rank::Tre => 3,
            Rank::Quattro => 4,
            Rank::Cinque => 5,
            Rank::Sei => 6,
            Rank::Sette => 7,
            Rank::Fante => 8,
            Rank::Cavallo => 9,
            Rank::Re => 10,
        }
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Asso),
            2 => Some(Rank::Due),
            3 => Some(Rank::Tre),
            4 => Some(Rank::Quattro),
            5 => Some(Rank::Cinque),
            6 => Some(Rank::Sei),
            7 => Some(Rank::Sette),
            8 => Some(Rank::Fante),
            9 => Some(Rank::Cavallo),
            10 => Some(Rank::Re),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Literal value for sum/equal capture arithmetic. The Matta counts
    /// as 7 here; its to-be-assigned value while played from hand is
    /// resolved by the move generator, never by the card itself.
    #[inline]
    pub fn value(self) -> u8 {
        self.rank.value()
    }

    #[inline]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::Asso
    }

    /// The wild card: 7 of Coppe. Exactly one exists in the deck.
    #[inline]
    pub fn is_matta(self) -> bool {
        self.suit == Suit::Coppe && self.rank == Rank::Sette
    }

    /// The 7 of Denari, worth a point on its own at settlement.
    #[inline]
    pub fn is_settebello(self) -> bool {
        self.suit == Suit::Denari && self.rank == Rank::Sette
    }

    /// Fixed primiera lookup, independent of rank order.
    #[inline]
    pub fn primiera_value(self) -> u8 {
        match self.rank {
            Rank::Sette => 21,
            Rank::Sei => 18,
            Rank::Asso => 16,
            Rank::Cinque => 15,
            Rank::Quattro => 14,
            Rank::Tre => 13,
            Rank::Due => 12,
            Rank::Fante | Rank::Cavallo | Rank::Re => 10,
        }
    }
}

// Note: Ord on Card is only for stable sorting: suit order D<C<B<S then
// rank order. Capture legality and scoring never compare cards this way.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
