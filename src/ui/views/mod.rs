pub mod compile;
pub mod docs;
pub mod list;
pub mod make;
