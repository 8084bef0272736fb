//! Card parsing from compact string tokens (e.g., "AD", "7C", "RS")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        };
        let rank = match rank_ch {
            'A' => Rank::Asso,
            '2' => Rank::Due,
            '3' => Rank::Tre,
            '4' => Rank::Quattro,
            '5' => Rank::Cinque,
            '6' => Rank::Sei,
            '7' => Rank::Sette,
            'F' => Rank::Fante,
            'C' => Rank::Cavallo,
            'R' => Rank::Re,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        let suit = match suit_ch {
            'D' => Suit::Denari,
            'C' => Suit::Coppe,
            'B' => Suit::Bastoni,
            'S' => Suit::Spade,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AD", "7C") into
/// Card instances. Fails if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
