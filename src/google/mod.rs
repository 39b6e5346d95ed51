pub mod gcal;
