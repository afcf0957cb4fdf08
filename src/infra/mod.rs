pub mod csv_io;
pub mod download;
