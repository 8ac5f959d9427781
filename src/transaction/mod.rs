pub mod model;

pub use model::{REWARD_AMOUNT, REWARD_SENDER, Transaction};
