//! Material estimation over geometric pieces.
//!
//! Flat pieces (sheet stock) expose surface [`Area`]; cast pieces
//! additionally expose [`Volume`]. The two capabilities are deliberately
//! separate traits so a flat piece never has to stub out a volume it does
//! not have. Estimation code works against the capability traits only and
//! never inspects which concrete piece it holds.

pub mod cutlist;
pub mod piece;

pub use cutlist::{CutList, total_volume};
pub use piece::{Area, Block, Circle, Rectangle, Square, Volume};
