pub mod antibiogram;
pub mod asha;
pub mod health;
pub mod indicators;
pub mod rates;
pub mod regions;
pub mod rollup;
pub mod selection;
