pub mod augment;
pub mod euler;
pub mod order;

pub use augment::*;
pub use euler::*;
pub use order::*;
