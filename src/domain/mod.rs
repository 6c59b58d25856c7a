pub mod eth;
pub mod fees;
pub mod wallet;
pub mod withdraw;
