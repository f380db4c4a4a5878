//! Board controller
//!
//! Owns everything that lives for the length of a page session: the API
//! client, the surface, the last loaded activities, the search text and the
//! two timers (search debounce and message auto-hide). Front-ends call its
//! methods from their event handlers.
//!
//! All work happens on one thread. Loads and submissions suspend only
//! themselves; nothing here holds a `RefCell` borrow across an await.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::api::ActivitiesApi;
use crate::config::UiConfig;
use crate::error::BoardError;
use crate::models::ActivityMap;
use crate::surface::Surface;
use crate::timer::{Scheduler, TimerSlot};
use crate::validation::{validate_signup, SignupForm, ValidationError};
use crate::view::{
    render_board, render_participants, BoardRender, Message, PARTICIPANTS_FAILED_TEXT,
    SIGNUP_FAILED_TEXT, SIGNUP_FALLBACK_TEXT, UNREGISTER_FAILED_TEXT,
};

/// Result of a signup (or unregister) attempt, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Rejected before any request was made
    Invalid(ValidationError),
    /// Server accepted; its confirmation message
    Accepted(String),
    /// Server refused; its detail, or the generic fallback
    Refused(String),
    /// The request failed in transit or the reply was unreadable
    Failed(String),
}

impl SignupOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SignupOutcome::Accepted(_))
    }

    /// Text that was shown for this outcome
    pub fn text(&self) -> String {
        match self {
            SignupOutcome::Invalid(e) => e.to_string(),
            SignupOutcome::Accepted(t) | SignupOutcome::Refused(t) | SignupOutcome::Failed(t) => {
                t.clone()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Enrollment {
    Signup,
    Unregister,
}

/// Keeps the submit control disabled for as long as it lives
struct SubmitGuard<'a, S: Surface>(&'a S);

impl<'a, S: Surface> SubmitGuard<'a, S> {
    fn engage(surface: &'a S) -> Self {
        surface.set_submitting(true);
        Self(surface)
    }
}

impl<S: Surface> Drop for SubmitGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_submitting(false);
    }
}

/// One per page session
pub struct BoardController<A, S, T: Scheduler> {
    api: A,
    surface: Rc<S>,
    config: UiConfig,
    activities: RefCell<ActivityMap>,
    search: RefCell<String>,
    search_timer: TimerSlot<T>,
    message_timer: TimerSlot<T>,
}

impl<A, S, T> BoardController<A, S, T>
where
    A: ActivitiesApi + 'static,
    S: Surface + 'static,
    T: Scheduler + Clone + 'static,
{
    pub fn new(api: A, surface: S, scheduler: T, config: UiConfig) -> Self {
        Self {
            api,
            surface: Rc::new(surface),
            config,
            activities: RefCell::new(ActivityMap::new()),
            search: RefCell::new(String::new()),
            search_timer: TimerSlot::new(scheduler.clone()),
            message_timer: TimerSlot::new(scheduler),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Activities from the last successful load
    pub fn activities(&self) -> ActivityMap {
        self.activities.borrow().clone()
    }

    pub fn search(&self) -> String {
        self.search.borrow().clone()
    }

    /// Initial load when the page comes up
    pub async fn start(&self) {
        tracing::info!("Activity board starting");
        self.load_activities().await;
    }

    /// Fetch activities for the current search text and redraw the list.
    ///
    /// Failures are logged and drawn as a placeholder; they are never retried.
    /// Returns whether fresh activities were drawn.
    pub async fn load_activities(&self) -> bool {
        let search = self.search();
        let query = (!search.is_empty()).then_some(search.as_str());

        match self.api.list_activities(query).await {
            Ok(activities) => {
                tracing::debug!(count = activities.len(), search = %search, "Loaded activities");
                let board = render_board(&activities);
                *self.activities.borrow_mut() = activities;
                self.surface.show_board(&board);
                true
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.surface.show_board(&BoardRender::Failed);
                false
            }
        }
    }

    /// Record the search text without scheduling a reload
    pub fn set_search(&self, text: &str) {
        *self.search.borrow_mut() = text.to_string();
    }

    /// Keystroke in the search field: reload once typing pauses.
    ///
    /// Only the latest keystroke's reload survives; a reload that already
    /// started is left to finish.
    pub fn on_search_input(self: &Rc<Self>, text: &str) {
        self.set_search(text);

        let board = Rc::clone(self);
        self.search_timer.replace(
            self.config.search_debounce(),
            Box::pin(async move {
                board.load_activities().await;
            }),
        );
    }

    /// Fetch and show the participants of one activity; false if the
    /// failure message was shown instead
    pub async fn view_participants(&self, activity: &str) -> bool {
        match self.api.participants(activity).await {
            Ok(view) => {
                let panel = render_participants(&view);
                self.surface.show_participants(&panel);
                self.hide_message_after(self.config.participants_display());
                true
            }
            Err(e) => {
                tracing::error!("Error fetching participants: {}", e);
                self.show_persistent(Message::error(PARTICIPANTS_FAILED_TEXT));
                false
            }
        }
    }

    /// Validate and submit the signup form
    pub async fn submit_signup(&self, form: &SignupForm) -> SignupOutcome {
        self.enroll(form, Enrollment::Signup).await
    }

    /// Validate and submit an unregister request for the same form fields
    pub async fn unregister(&self, form: &SignupForm) -> SignupOutcome {
        self.enroll(form, Enrollment::Unregister).await
    }

    async fn enroll(&self, form: &SignupForm, kind: Enrollment) -> SignupOutcome {
        let signup = match validate_signup(form, &self.config.email_domain) {
            Ok(signup) => signup,
            Err(e) => {
                self.show_transient(Message::error(e.to_string()));
                return SignupOutcome::Invalid(e);
            }
        };

        let _guard = SubmitGuard::engage(&*self.surface);

        let result = match kind {
            Enrollment::Signup => self.api.signup(&signup.activity, &signup.email).await,
            Enrollment::Unregister => self.api.unregister(&signup.activity, &signup.email).await,
        };

        match result {
            Ok(receipt) => {
                tracing::info!(activity = %signup.activity, ?kind, "Enrollment accepted");
                self.show_transient(Message::success(receipt.message.clone()));
                self.surface.reset_form();
                self.load_activities().await;
                SignupOutcome::Accepted(receipt.message)
            }
            Err(BoardError::Status { status, detail }) => {
                tracing::warn!(activity = %signup.activity, status, "Enrollment refused");
                let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK_TEXT.to_string());
                self.show_transient(Message::error(text.clone()));
                SignupOutcome::Refused(text)
            }
            Err(e) => {
                tracing::error!("Error submitting {:?}: {}", kind, e);
                let text = match kind {
                    Enrollment::Signup => SIGNUP_FAILED_TEXT,
                    Enrollment::Unregister => UNREGISTER_FAILED_TEXT,
                };
                self.show_transient(Message::error(text));
                SignupOutcome::Failed(text.to_string())
            }
        }
    }

    fn show_transient(&self, message: Message) {
        self.surface.show_message(&message);
        self.hide_message_after(self.config.message_display());
    }

    /// Stays up until the next message replaces it
    fn show_persistent(&self, message: Message) {
        self.message_timer.clear();
        self.surface.show_message(&message);
    }

    fn hide_message_after(&self, delay: Duration) {
        let surface = Rc::clone(&self.surface);
        self.message_timer
            .replace(delay, Box::pin(async move { surface.hide_message() }));
    }
}
