pub mod device;
pub mod device_config;
pub mod telemetry;
pub mod user;

/*
 A device is the root of the domain: config entries and telemetry points hang
 off it and die with it (FK cascade). Users merely *own* devices; a device can
 exist unowned (owner_id NULL) and losing its owner only nulls the link.
 Users themselves are never hard-deleted, only deactivated via is_active.
*/
