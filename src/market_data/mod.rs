/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

pub mod normalize;
pub mod provider;
pub mod twelve_data;
pub mod csv_provider;

pub use normalize::normalize;
pub use provider::{CandleProvider, MockCandleProvider};
pub use twelve_data::TwelveDataProvider;
pub use csv_provider::CsvCandleProvider;
