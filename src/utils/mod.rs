pub mod channel_id;
pub mod http_client;

pub use channel_id::synthetic_channel_id;
pub use http_client::StandardHttpClient;
