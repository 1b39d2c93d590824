//! SeaORM entity definitions
//!
//! Kept separate from the domain models in `crate::models`; repositories
//! convert between the two.

pub mod channels;
pub mod prelude;
