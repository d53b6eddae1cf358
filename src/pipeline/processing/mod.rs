// Field normalizers: each one is a pure function of a single cell

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
