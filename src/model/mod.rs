pub mod attendance;
pub mod employee;
pub mod employee_ref;
pub mod identity;
pub mod leave_request;
pub mod role;
