pub mod modals;
pub mod sensor_card;
