pub mod transformer;
pub mod types;

pub use transformer::Transformer;
pub use types::Viewport;
