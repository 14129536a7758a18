pub mod random_id;
pub mod system_clock;
