pub mod enrollment;
pub mod hotel;
pub mod ticket;
