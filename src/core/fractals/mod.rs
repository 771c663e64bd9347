pub mod multibrot;
