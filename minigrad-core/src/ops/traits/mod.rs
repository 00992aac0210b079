pub mod numeric;

pub use numeric::NumericElement;
