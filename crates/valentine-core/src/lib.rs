pub mod avoidance;
pub mod burst;
pub mod constants;
pub mod decline;
pub mod page;
pub mod quotes;

pub use avoidance::*;
pub use burst::*;
pub use constants::*;
pub use decline::*;
pub use page::*;
pub use quotes::*;
