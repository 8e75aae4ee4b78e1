pub mod attendee;
pub mod availability_response;
pub mod event;
pub mod time_slot;

pub use attendee::{Attendee, NewAttendee};
pub use availability_response::{AvailabilityResponse, NewSubmission, ResponseUpdate};
pub use event::{Event, EventDetail, NewEvent, Respondent, UpdateEvent};
pub use time_slot::{NewSlot, SlotInput, TimeSlot};
