pub mod bucket;
pub mod context;
pub mod holding;
pub mod matrix;
pub mod policy;
pub mod sheet;
pub mod spot;

pub use bucket::Bucket;
pub use context::Context;
pub use holding::Holding;
pub use matrix::Matrix;
pub use policy::Policy;
pub use sheet::Sheet;
pub use spot::Spot;
