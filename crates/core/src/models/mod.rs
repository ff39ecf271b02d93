pub mod cohort;
pub mod deck;
pub mod highlights;
pub mod lead;
pub mod revenue;
pub mod settings;
pub mod slider;
pub mod team;
pub mod wallet;
