pub mod seat;

pub use seat::{NewSeat, Seat};
