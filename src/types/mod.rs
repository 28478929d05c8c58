pub mod errors;
pub mod ids;
pub mod safepath;

pub use errors::*;
pub use ids::*;
pub use safepath::*;
