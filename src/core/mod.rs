pub mod normalize;
pub mod report;

pub use crate::domain::model::{
    CountrySummary, CurrencyDescriptor, ExchangeSnapshot, NewsItem, PersonSummary, Report,
};
pub use crate::domain::ports::{CountryProvider, ExchangeRateProvider, NewsProvider, PersonProvider};
pub use crate::utils::error::Result;
