/// Free-look camera standing in for the handheld device viewpoint.
pub mod device_camera;

pub use device_camera::{DeviceCamera, camera_controller};
