pub mod applications;
pub mod dashboard;
pub mod health;
pub mod registrations;
