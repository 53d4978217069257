pub mod constants;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod gradient;
pub mod lazer;
pub mod params;
pub mod rect;
pub mod session;
pub mod spark;
pub mod storage;

pub use effect::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use gradient::*;
pub use lazer::*;
pub use params::*;
pub use rect::*;
pub use session::*;
pub use spark::*;
pub use storage::*;
