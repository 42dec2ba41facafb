pub mod auth;
pub mod eligibility;
pub mod enrollment;
pub mod hotel;
pub mod id;
pub mod ticket;
