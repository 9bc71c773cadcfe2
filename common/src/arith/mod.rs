mod factorial;
mod multiply;

pub use factorial::factorial;
pub use multiply::recursive_multiply;
