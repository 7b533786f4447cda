pub use fldpln::*;
