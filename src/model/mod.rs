pub mod attendance;
pub mod employee;

pub use attendance::{Attendance, AttendanceStatus};
pub use employee::Employee;
