pub mod a001_booking;
pub mod a002_table;
