pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod seed;

mod router;
pub use router::get_router;
