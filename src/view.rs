//! View models
//!
//! Everything a surface needs to draw the board, built from API data. All
//! fields are plain text: surfaces insert them as text nodes, never as
//! markup, so activity names and descriptions cannot inject HTML.

use crate::models::{ActivityMap, ParticipantsView};

pub const NO_RESULTS_TEXT: &str = "No activities found matching your search.";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const PARTICIPANTS_FAILED_TEXT: &str = "Failed to load participants.";
pub const SIGNUP_FALLBACK_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";
pub const SELECT_PLACEHOLDER_TEXT: &str = "-- Select an activity --";

/// One activity as displayed in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// "<n> spots left", with " (FULL)" appended when n is zero
    pub availability: String,
    pub spots_left: i64,
    /// Full cards get a distinguishing style and no select option
    pub full: bool,
}

/// An entry in the activity select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// What the activity list should show after a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRender {
    /// Cards plus the select options for activities with room left
    Cards {
        cards: Vec<ActivityCard>,
        options: Vec<SelectOption>,
    },
    /// The load succeeded but matched nothing; the select is emptied too
    NoResults,
    /// The load failed; the select keeps whatever it had
    Failed,
}

impl BoardRender {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            BoardRender::Cards { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            BoardRender::Cards { options, .. } => options,
            _ => &[],
        }
    }

    /// Placeholder text shown instead of cards, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            BoardRender::Cards { .. } => None,
            BoardRender::NoResults => Some(NO_RESULTS_TEXT),
            BoardRender::Failed => Some(LOAD_FAILED_TEXT),
        }
    }
}

/// Transient participants panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantsPanel {
    pub header: String,
    pub count_line: String,
    /// Emails, or the single "No participants yet" placeholder
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// Class name used by the browser stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A one-line status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

fn availability_line(spots_left: i64, full: bool) -> String {
    if full {
        format!("{} spots left (FULL)", spots_left)
    } else {
        format!("{} spots left", spots_left)
    }
}

/// Build cards and select options for a freshly loaded mapping
pub fn render_board(activities: &ActivityMap) -> BoardRender {
    if activities.is_empty() {
        return BoardRender::NoResults;
    }

    let mut cards = Vec::with_capacity(activities.len());
    let mut options = Vec::new();

    for (name, activity) in activities.iter() {
        let spots_left = activity.spots_left();
        let full = activity.is_full();

        cards.push(ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability: availability_line(spots_left, full),
            spots_left,
            full,
        });

        if !full {
            options.push(SelectOption {
                value: name.to_string(),
                label: name.to_string(),
            });
        }
    }

    BoardRender::Cards { cards, options }
}

/// Build the participants panel for one activity
pub fn render_participants(view: &ParticipantsView) -> ParticipantsPanel {
    let entries = if view.participants.is_empty() {
        vec![NO_PARTICIPANTS_TEXT.to_string()]
    } else {
        view.participants.clone()
    };

    ParticipantsPanel {
        header: format!("Participants for {}", view.activity),
        count_line: format!("{} / {} spots filled", view.count, view.max_participants),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn sample() -> ActivityMap {
        [
            (
                "Chess Club",
                Activity::new("Chess", "Fridays", 12).participant("michael@mergington.edu"),
            ),
            (
                "Gym Class",
                Activity::new("Sports", "Mondays", 2)
                    .participant("john@mergington.edu")
                    .participant("olivia@mergington.edu"),
            ),
            ("Art Studio", Activity::new("Paint", "Wednesdays", 15)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_card_and_option_counts() {
        let board = render_board(&sample());
        assert_eq!(board.cards().len(), 3);
        assert_eq!(board.options().len(), 2);
        assert!(board.options().iter().all(|o| o.value != "Gym Class"));
        assert_eq!(board.placeholder(), None);
    }

    #[test]
    fn test_full_card_is_marked() {
        let board = render_board(&sample());
        let gym = &board.cards()[1];
        assert_eq!(gym.name, "Gym Class");
        assert!(gym.full);
        assert_eq!(gym.spots_left, 0);
        assert_eq!(gym.availability, "0 spots left (FULL)");

        let chess = &board.cards()[0];
        assert!(!chess.full);
        assert_eq!(chess.availability, "11 spots left");
    }

    #[test]
    fn test_cards_follow_map_order() {
        let board = render_board(&sample());
        let names: Vec<&str> = board.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Gym Class", "Art Studio"]);
    }

    #[test]
    fn test_empty_map_renders_placeholder() {
        let board = render_board(&ActivityMap::new());
        assert_eq!(board, BoardRender::NoResults);
        assert_eq!(board.placeholder(), Some(NO_RESULTS_TEXT));
        assert!(board.options().is_empty());
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let map: ActivityMap = [(
            "<img src=x onerror=alert(1)>",
            Activity::new("<b>bold</b>", "<script>", 5),
        )]
        .into_iter()
        .collect();

        let board = render_board(&map);
        let card = &board.cards()[0];
        assert_eq!(card.name, "<img src=x onerror=alert(1)>");
        assert_eq!(card.description, "<b>bold</b>");
        assert_eq!(board.options()[0].label, "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn test_participants_panel() {
        let panel = render_participants(&ParticipantsView {
            activity: "Chess Club".to_string(),
            count: 2,
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        });
        assert_eq!(panel.header, "Participants for Chess Club");
        assert_eq!(panel.count_line, "2 / 12 spots filled");
        assert_eq!(panel.entries.len(), 2);
    }

    #[test]
    fn test_participants_placeholder() {
        let panel = render_participants(&ParticipantsView {
            activity: "Art Studio".to_string(),
            count: 0,
            max_participants: 15,
            participants: vec![],
        });
        assert_eq!(panel.entries, vec![NO_PARTICIPANTS_TEXT.to_string()]);
        assert_eq!(panel.count_line, "0 / 15 spots filled");
    }
}
