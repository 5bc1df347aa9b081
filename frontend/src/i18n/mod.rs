pub mod en_us;

pub use en_us as current;
