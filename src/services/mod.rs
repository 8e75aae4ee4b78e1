pub mod attendee_service;
pub mod availability_service;
pub mod event_service;
pub mod time_slot_service;

pub use attendee_service::AttendeeService;
pub use availability_service::AvailabilityService;
pub use event_service::EventService;
pub use time_slot_service::TimeSlotService;
