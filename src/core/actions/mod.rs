pub mod scan_grid;
