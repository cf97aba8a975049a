pub mod len;
pub mod num;
pub mod reference;
pub mod text;
