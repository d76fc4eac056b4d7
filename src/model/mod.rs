pub mod pathway;
pub mod session;
