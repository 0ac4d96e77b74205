use super::board::Occupant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the tag stored on the board
    pub fn to_occupant(self) -> Occupant {
        match self {
            Player::One => Occupant::One,
            Player::Two => Occupant::Two,
        }
    }

    /// Default display label, used when no name has been set
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }
}

/// Display names for both players. Opaque to the game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl PlayerNames {
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        PlayerNames {
            one: one.into(),
            two: two.into(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames::new(Player::One.label(), Player::Two.label())
    }
}
