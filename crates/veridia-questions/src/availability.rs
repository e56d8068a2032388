//! States where Veridia physicians are licensed to prescribe. Backs the
//! state-availability step; the roster is updated as licensing expands.

const SUPPORTED_STATES: [&str; 18] = [
    "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "MD", "MI", "NC", "NJ", "NV", "NY", "OH", "PA",
    "TX", "VA", "WA",
];

pub fn supported_states() -> &'static [&'static str] {
    &SUPPORTED_STATES
}

/// Case-insensitive membership test on the two-letter state code.
pub fn state_supported(code: &str) -> bool {
    let code = code.trim();
    SUPPORTED_STATES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(code))
}
