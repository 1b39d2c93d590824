//! SeaORM repository implementations
//!
//! Repositories own the conversion between persisted entities and the domain
//! models in `crate::models`.

pub mod channel;

pub use channel::ChannelSeaOrmRepository;
