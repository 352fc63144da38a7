pub mod s7;
