// Utils compartidos

pub mod constants;
pub mod google_maps_ffi;
