pub mod check_models;
