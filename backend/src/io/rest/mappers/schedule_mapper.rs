use crate::domain::models::ScheduleEntry as DomainScheduleEntry;
use shared::ScheduleEntry;

pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_dto(entry: &DomainScheduleEntry) -> ScheduleEntry {
        ScheduleEntry {
            date: entry.date.format("%Y-%m-%d").to_string(),
            day_type: entry.day_type.to_string(),
            notes: entry.notes.clone(),
        }
    }

    pub fn to_dto_list(entries: &[DomainScheduleEntry]) -> Vec<ScheduleEntry> {
        entries.iter().map(Self::to_dto).collect()
    }
}
