pub use super::channels::Entity as Channels;
