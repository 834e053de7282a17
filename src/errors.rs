// ============================================================
// Ledger errors — every kind aborts the call and reverts state
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LedgerError {
    /// Roster passed to init was empty or repeated an address.
    InvalidRoster,
    /// Caller is not part of the voter roster.
    NotAVoter,
    /// No recipient has been suggested for the current round.
    NoTarget,
    /// Caller already cast a ballot in the current round.
    AlreadyVoted,
    /// Yes votes do not exceed half of the roster.
    InsufficientVotes,
}

impl LedgerError {
    pub const fn message(self) -> &'static str {
        match self {
            LedgerError::InvalidRoster => "Invalid voter roster",
            LedgerError::NotAVoter => "Not a voter",
            LedgerError::NoTarget => "No target suggested",
            LedgerError::AlreadyVoted => "Already voted",
            LedgerError::InsufficientVotes => "Not enough votes",
        }
    }
}
