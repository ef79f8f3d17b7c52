pub mod imu;
