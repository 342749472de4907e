pub mod util;

mod engine;
pub use engine::*;

pub mod geom;

#[cfg(test)]
pub mod test;
