pub mod cdn;

pub use cdn::ensure_cdn;
