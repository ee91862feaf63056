mod alphabet;
mod annotate;
mod error;
mod growth;
mod input;
mod scanner;
mod types;

pub use alphabet::*;
pub use annotate::*;
pub use error::*;
pub use growth::*;
pub use input::*;
pub use scanner::*;
pub use types::*;
