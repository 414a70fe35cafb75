pub mod recording;
pub mod stream;
