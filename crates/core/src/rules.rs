use crate::{two_three_of_a_kind, Card, RoundError, Victory};

pub type Evaluator = fn(&[Card]) -> Victory;

#[derive(Clone, Copy)]
pub enum RoundRule {
    Implemented(Evaluator),
    Unimplemented,
}

impl std::fmt::Debug for RoundRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundRule::Implemented(_) => f.write_str("Implemented"),
            RoundRule::Unimplemented => f.write_str("Unimplemented"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoundDef {
    pub ordinal: u8,
    pub name: &'static str,
    /// Card groups a player lays down when going down manually.
    pub groups_needed: usize,
    pub rule: RoundRule,
}

impl RoundDef {
    pub fn evaluator(&self) -> Result<Evaluator, RoundError> {
        match self.rule {
            RoundRule::Implemented(evaluator) => Ok(evaluator),
            RoundRule::Unimplemented => Err(RoundError::UnsupportedRound(self.ordinal)),
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self.rule, RoundRule::Implemented(_))
    }
}

pub const ROUNDS: [RoundDef; 7] = [
    RoundDef {
        ordinal: 1,
        name: "2 x 3 of a kind (No 'May I' allowed on this hand!)",
        groups_needed: 2,
        rule: RoundRule::Implemented(two_three_of_a_kind),
    },
    RoundDef {
        ordinal: 2,
        name: "1 x 3 of a kind & 1 x 4 card sequence",
        groups_needed: 2,
        rule: RoundRule::Unimplemented,
    },
    RoundDef {
        ordinal: 3,
        name: "2 x 4 card sequence",
        groups_needed: 2,
        rule: RoundRule::Unimplemented,
    },
    RoundDef {
        ordinal: 4,
        name: "3 x 3 of a kind",
        groups_needed: 3,
        rule: RoundRule::Unimplemented,
    },
    RoundDef {
        ordinal: 5,
        name: "2 x 3 of a kind & 1 x 4 card sequence",
        groups_needed: 3,
        rule: RoundRule::Unimplemented,
    },
    RoundDef {
        ordinal: 6,
        name: "1 x 3 of a kind & 2 x 4 card sequence",
        groups_needed: 3,
        rule: RoundRule::Unimplemented,
    },
    RoundDef {
        ordinal: 7,
        name: "3 x 4 card sequence",
        groups_needed: 3,
        rule: RoundRule::Unimplemented,
    },
];

pub fn round_def(ordinal: u8) -> Result<&'static RoundDef, RoundError> {
    ROUNDS
        .iter()
        .find(|def| def.ordinal == ordinal)
        .ok_or(RoundError::UnknownRound(ordinal))
}
