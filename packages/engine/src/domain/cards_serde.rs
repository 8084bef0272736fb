//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Denari => "DENARI",
            Suit::Coppe => "COPPE",
            Suit::Bastoni => "BASTONI",
            Suit::Spade => "SPADE",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "DENARI" => Ok(Suit::Denari),
            "COPPE" => Ok(Suit::Coppe),
            "BASTONI" => Ok(Suit::Bastoni),
            "SPADE" => Ok(Suit::Spade),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// Rank serde
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Rank::Asso => "ASSO",
            Rank::Due => "DUE",
            Rank::Tre => "TRE",
            Rank::Quattro => "QUATTRO",
            Rank::Cinque => "CINQUE",
            Rank::Sei => "SEI",
            Rank::Sette => "SETTE",
            Rank::Fante => "FANTE",
            Rank::Cavallo => "CAVALLO",
            Rank::Re => "RE",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ASSO" => Ok(Rank::Asso),
            "DUE" => Ok(Rank::Due),
            "TRE" => Ok(Rank::Tre),
            "QUATTRO" => Ok(Rank::Quattro),
            "CINQUE" => Ok(Rank::Cinque),
            "SEI" => Ok(Rank::Sei),
            "SETTE" => Ok(Rank::Sette),
            "FANTE" => Ok(Rank::Fante),
            "CAVALLO" => Ok(Rank::Cavallo),
            "RE" => Ok(Rank::Re),
            _ => Err(serde::de::Error::custom(format!("Invalid rank: {s}"))),
        }
    }
}

// Card serde (compact 2-character format like "AD", "7C")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rank_char = match self.rank {
            Rank::Asso => 'A',
            Rank::Due => '2',
            Rank::Tre => '3',
            Rank::Quattro => '4',
            Rank::Cinque => '5',
            Rank::Sei => '6',
            Rank::Sette => '7',
            Rank::Fante => 'F',
            Rank::Cavallo => 'C',
            Rank::Re => 'R',
        };
        let suit_char = match self.suit {
            Suit::Denari => 'D',
            Suit::Coppe => 'C',
            Suit::Bastoni => 'B',
            Suit::Spade => 'S',
        };
        serializer.serialize_str(&format!("{rank_char}{suit_char}"))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
