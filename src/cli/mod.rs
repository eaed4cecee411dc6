pub mod check;
pub mod hash;
pub mod metadata;
pub mod sections;
