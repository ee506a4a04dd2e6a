use crate::domain::models::{BookingForm as DomainBookingForm, CompletedBooking};
use shared::{BookingForm, BookingRecord};

pub struct BookingMapper;

impl BookingMapper {
    /// Convert dialog fields from the wire into the domain form
    pub fn form_to_domain(dto: BookingForm) -> DomainBookingForm {
        DomainBookingForm {
            teacher_name: dto.teacher_name,
            subject: dto.subject,
            notes: dto.notes,
        }
    }

    pub fn form_to_dto(form: &DomainBookingForm) -> BookingForm {
        BookingForm {
            teacher_name: form.teacher_name.clone(),
            subject: form.subject.clone(),
            notes: form.notes.clone(),
        }
    }

    pub fn to_record(booking: &CompletedBooking) -> BookingRecord {
        BookingRecord {
            id: booking.id.to_string(),
            teacher_name: booking.teacher_name.clone(),
            subject: booking.subject.clone(),
            notes: booking.notes.clone(),
            slot_id: booking.slot.to_string(),
            start: booking.start.to_string(),
            end: booking.end.to_string(),
            confirmed_at: booking.confirmed_at.to_rfc3339(),
        }
    }

    pub fn to_record_list(bookings: &[CompletedBooking]) -> Vec<BookingRecord> {
        bookings.iter().map(Self::to_record).collect()
    }
}
