pub mod frame_record;
pub mod summary;
