mod meta;
pub use self::meta::Response;

mod number;

mod coin;
pub use self::coin::{Coin, CoinDto};

mod price;
pub use self::price::{CoinPrice, CoinPriceDto};
