pub mod attacks;
pub mod castle;
pub mod oracle;
pub mod simulate;
pub mod square_control;
pub mod types;
pub mod validate;
