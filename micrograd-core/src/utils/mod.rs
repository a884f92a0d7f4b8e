pub mod numeric;
pub mod testing;

pub use numeric::derivative;
