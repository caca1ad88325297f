pub mod colour;
pub mod complex;
pub mod screen_point;
pub mod surface_size;
