// Views: funciones que escriben en el DOM (sin lógica)

pub mod gallery;
pub mod login_gate;
pub mod reviews;
