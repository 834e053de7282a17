#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod round;

use errors::LedgerError;
use round::Round;

// ============================================================
// Contract
// ============================================================

/// Pooled EGLD fund paid out to a single recipient once a strict majority
/// of a fixed voter roster approves it.
#[multiversx_sc::contract]
pub trait SettlementLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, voters: MultiValueEncoded<ManagedAddress>) {
        if voters.is_empty() {
            self.fail(LedgerError::InvalidRoster);
        }
        for voter in voters.into_iter() {
            if !self.voters().insert(voter) {
                self.fail(LedgerError::InvalidRoster);
            }
        }
        self.round().set(Round::new());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Anyone can top up the pool, voter or not.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.deposit_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: suggestTarget
    // Any voter can suggest; a new suggestion restarts the round.
    // ========================================================

    #[endpoint(suggestTarget)]
    fn suggest_target(&self, target: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_voter(&caller);

        let mut round = self.round().get();
        round.propose(target.clone());
        self.round().set(&round);

        self.target_suggested_event(&caller, &target);
    }

    // ========================================================
    // ENDPOINT: vote
    // One ballot per voter per round.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, support: bool) {
        let caller = self.blockchain().get_caller();
        self.require_voter(&caller);

        let mut round = self.round().get();
        if let Err(error) = round.cast(&caller, support) {
            self.fail(error);
        }
        self.round().set(&round);

        self.vote_event(&caller, support);
    }

    // ========================================================
    // ENDPOINT: distribute
    // Sends the whole pool to the target once yes > N / 2.
    // Transfer and reset happen in the same transaction.
    // ========================================================

    #[endpoint(distribute)]
    fn distribute(&self) {
        let mut round = self.round().get();
        let target = match round.settle(self.voters().len()) {
            Ok(target) => target,
            Err(error) => self.fail(error),
        };
        self.round().set(&round);

        let pooled = self.pooled_balance();
        if pooled > 0u64 {
            self.send().direct_egld(&target, &pooled);
        }

        self.distribution_event(&target, &pooled);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_voter(&self, address: &ManagedAddress) {
        if !self.voters().contains(address) {
            self.fail(LedgerError::NotAVoter);
        }
    }

    fn pooled_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// Signals `error` as a user error, reverting the whole transaction.
    fn fail(&self, error: LedgerError) -> ! {
        sc_panic!(error.message())
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isVoter)]
    fn is_voter(&self, address: &ManagedAddress) -> bool {
        self.voters().contains(address)
    }

    #[view(voterCount)]
    fn voter_count(&self) -> usize {
        self.voters().len()
    }

    #[view(getVoters)]
    fn get_voters(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters().iter() {
            result.push(voter);
        }
        result
    }

    #[view(yesVotes)]
    fn yes_votes(&self) -> u32 {
        self.round().get().yes_votes
    }

    #[view(noVotes)]
    fn no_votes(&self) -> u32 {
        self.round().get().no_votes
    }

    #[view(hasVoted)]
    fn has_voted(&self, address: &ManagedAddress) -> bool {
        self.round().get().has_voted(address)
    }

    #[view(getTarget)]
    fn get_target(&self) -> OptionalValue<ManagedAddress> {
        match self.round().get().target {
            Some(target) => OptionalValue::Some(target),
            None => OptionalValue::None,
        }
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.pooled_balance()
    }

    /// (target, yes votes, no votes, voter count, pooled balance)
    #[view(getRoundInfo)]
    fn get_round_info(&self) -> MultiValue5<Option<ManagedAddress>, u32, u32, u64, BigUint> {
        let round = self.round().get();
        let voter_count = self.voters().len() as u64;
        (
            round.target,
            round.yes_votes,
            round.no_votes,
            voter_count,
            self.pooled_balance(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);

    #[event("targetSuggested")]
    fn target_suggested_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
    );

    #[event("vote")]
    fn vote_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] support: bool);

    #[event("distribution")]
    fn distribution_event(&self, #[indexed] target: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("round")]
    fn round(&self) -> SingleValueMapper<Round<Self::Api>>;
}
