pub mod entity;
pub mod filter;
pub mod indicator;
pub mod record;
pub mod selection;
pub mod series;
pub mod total;
