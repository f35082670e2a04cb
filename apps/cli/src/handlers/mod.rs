pub mod check;
pub mod design;
pub mod fields;
