// Re-export all model types
pub use self::planet::*;

mod planet;
