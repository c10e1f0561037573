pub mod storage;

pub use storage::FrequentLevel;
