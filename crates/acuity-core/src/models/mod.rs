pub mod answer;
pub mod assessment;
pub mod pathway;
pub mod validation;
