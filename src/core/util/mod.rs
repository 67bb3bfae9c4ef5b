pub mod cell_to_complex_coords;
