pub mod amount;
mod currency;

pub use currency::{Currency, CurrencyRecord};

#[cfg(test)]
mod tests;
