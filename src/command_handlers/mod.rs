pub mod dispatch;
pub mod patch;
