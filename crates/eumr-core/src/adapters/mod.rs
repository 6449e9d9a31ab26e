//! Provider adapters.
//!
//! Adapters normalize an upstream payload shape into validated domain
//! types; failures surface as structured `ProviderError`s.

mod yahoo;

pub use yahoo::YahooAdapter;
