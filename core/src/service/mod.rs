pub mod accumulator;
pub mod formatter;
pub mod report_service;
