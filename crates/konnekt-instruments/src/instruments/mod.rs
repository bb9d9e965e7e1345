pub mod bsm24;
pub mod pq24;
