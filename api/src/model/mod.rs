pub mod hotel;
