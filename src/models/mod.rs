pub mod day_record;
pub mod event;
pub mod event_type;
pub mod geo;
pub mod holiday;
pub mod work_mode;
