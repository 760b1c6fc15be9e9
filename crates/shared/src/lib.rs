//! Wire types shared by the key issuance client and anything that talks to the
//! issuance endpoint.

pub mod domain;
pub mod error;
pub mod protocol;
