//! Pure, synchronous aggregation over a fixed snapshot of events. Every
//! view recomputes from scratch after a refresh; nothing here keeps
//! running state.

pub mod daily;
pub mod monthly;
pub mod weekly;
