// Match scoring engine: five factor scorers, weighted aggregation, tier
// classification, and batch ranking. The core is pure and synchronous —
// handlers are a thin HTTP shim over it.

pub mod factors;
pub mod handlers;
pub mod rank;
pub mod score;
