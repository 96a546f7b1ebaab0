mod common;
pub use self::common::Query;

mod assets;
pub use self::assets::AssetsQuery;

mod history;
pub use self::history::{HistoryQuery, Interval};
