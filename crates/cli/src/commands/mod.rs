pub mod compare;
pub mod encode;
pub mod pack;
