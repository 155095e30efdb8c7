use crate::calendar::HorizontalDirection;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Month body interactions
    PressCell(NaiveDate),
    PressEvent(Uuid),
    SwipeHorizontal(HorizontalDirection),

    // Navigation
    GoToToday,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
