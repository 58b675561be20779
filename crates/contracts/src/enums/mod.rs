pub mod booking_status;
pub mod table_feature;
pub mod table_location;
pub mod table_shape;
