pub mod vec2;

// Re-export key types for easier use by dependent crates
pub use vec2::Vec2;
