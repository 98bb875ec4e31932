pub mod generation_controller;
pub mod generation_model;
pub mod generation_prompt;
pub mod generation_service;
