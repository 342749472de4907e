mod curve;
pub use curve::*;

mod vertex;
pub use vertex::*;

mod spine;
pub use spine::*;

mod ribbon;
pub use ribbon::*;

mod stroke;
pub use stroke::*;

mod config;
pub use config::*;

mod capture;
pub use capture::*;
