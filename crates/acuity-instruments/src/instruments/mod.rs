pub mod audit_c;
pub mod gad2;
pub mod gad7;
pub mod pain;
pub mod phq2;
pub mod phq9;
pub mod social;
pub mod who5;
