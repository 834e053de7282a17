multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::LedgerError;

// ============================================================
// Round — ballot state for the currently suggested target
// ============================================================

/// One voting round. Stored as a single value; endpoints load it, apply
/// one transition and write it back, so a failed transition never leaks
/// partial updates.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Round<M: ManagedTypeApi> {
    /// Recipient of the pooled balance if this round passes.
    pub target: Option<ManagedAddress<M>>,
    pub yes_votes: u32,
    pub no_votes: u32,
    /// Voters that already cast a ballot this round.
    pub voted: ManagedVec<M, ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> Default for Round<M> {
    fn default() -> Self {
        Round {
            target: None,
            yes_votes: 0,
            no_votes: 0,
            voted: ManagedVec::new(),
        }
    }
}

impl<M: ManagedTypeApi> Round<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn has_voted(&self, voter: &ManagedAddress<M>) -> bool {
        self.voted.iter().any(|cast| *cast == *voter)
    }

    /// Suggesting a target always opens a fresh round: ballots cast for a
    /// previous target are discarded.
    pub fn propose(&mut self, target: ManagedAddress<M>) {
        self.reset();
        self.target = Some(target);
    }

    /// Records `voter`'s ballot. Roster membership is checked by the caller.
    pub fn cast(&mut self, voter: &ManagedAddress<M>, support: bool) -> Result<(), LedgerError> {
        if !self.has_target() {
            return Err(LedgerError::NoTarget);
        }
        if self.has_voted(voter) {
            return Err(LedgerError::AlreadyVoted);
        }

        if support {
            self.yes_votes += 1;
        } else {
            self.no_votes += 1;
        }
        self.voted.push(voter.clone());
        Ok(())
    }

    /// Strict majority of the whole roster: `yes > N / 2`, so ties fail.
    pub fn has_majority(&self, voter_count: usize) -> bool {
        self.yes_votes as usize > voter_count / 2
    }

    /// Closes a passed round and hands back the recipient. On error the
    /// round is left exactly as it was.
    pub fn settle(&mut self, voter_count: usize) -> Result<ManagedAddress<M>, LedgerError> {
        if !self.has_majority(voter_count) {
            return Err(LedgerError::InsufficientVotes);
        }
        // unreachable through the contract: a yes vote needs a target
        let Some(target) = self.target.take() else {
            return Err(LedgerError::NoTarget);
        };
        self.reset();
        Ok(target)
    }

    pub fn reset(&mut self) {
        self.target = None;
        self.yes_votes = 0;
        self.no_votes = 0;
        self.voted = ManagedVec::new();
    }
}
