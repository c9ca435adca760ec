/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

pub mod candle;

pub use candle::{Candle, CandleSeries, RawCandle, RawField};
