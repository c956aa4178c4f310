pub mod car;
