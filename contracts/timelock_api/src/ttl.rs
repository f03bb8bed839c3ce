//! Storage lifetime for entries tied to a transaction's eta.

use soroban_sdk::Env;

/// Expected ledger close time.
pub const LEDGER_CLOSE_SECONDS: u64 = 5;

/// Number of ledgers an entry has to stay live so that it is still readable
/// at `timestamp`, plus `margin` ledgers. The result is capped at the
/// network's maximum TTL. An entry whose deadline lies past that cap is
/// archived first and has to be restored before it is used again.
pub fn ttl_until(env: &Env, timestamp: u64, margin: u32) -> u32 {
    let seconds = timestamp.saturating_sub(env.ledger().timestamp());
    let ledgers = seconds
        .div_ceil(LEDGER_CLOSE_SECONDS)
        .saturating_add(u64::from(margin));
    let max_ttl = env.storage().max_ttl();
    u32::try_from(ledgers).map_or(max_ttl, |ledgers| ledgers.min(max_ttl))
}
