pub mod ascii_gradient;
