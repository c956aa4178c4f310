pub mod car_card;
pub mod car_details;
pub mod catalog;
pub mod create_car;
pub mod delete_confirmation;
pub mod filter_modal;
