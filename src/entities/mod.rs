// Entity Models
//
// An account is an independent value type; the registry owns accounts
// by value and nothing else holds references into it.

pub mod account;

pub use account::{Account, AccountRegistry};
