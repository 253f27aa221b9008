pub mod centroid_matcher;
pub mod track_store;
pub mod tracked_object;
pub mod tracking_session;
