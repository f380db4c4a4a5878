//! Test doubles for the controller: a scripted API and a surface that
//! records everything drawn on it.

use async_trait::async_trait;
use std::cell::RefCell;
use std::future::Future;
use tokio::task::LocalSet;

use crate::api::ActivitiesApi;
use crate::controller::BoardController;
use crate::error::{BoardError, BoardResult};
use crate::models::{ActivityMap, ParticipantsView, SignupReceipt};
use crate::surface::Surface;
use crate::timer::TokioScheduler;
use crate::view::{BoardRender, Message, ParticipantsPanel};

pub type TestController = BoardController<MockApi, RecordingSurface, TokioScheduler>;

/// Run a test body inside a `LocalSet` so timers can spawn local tasks
pub async fn local<F: Future>(f: F) -> F::Output {
    LocalSet::new().run_until(f).await
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(Option<String>),
    Participants(String),
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Returns canned responses and records every call
pub struct MockApi {
    calls: RefCell<Vec<ApiCall>>,
    list: RefCell<BoardResult<ActivityMap>>,
    participants: BoardResult<ParticipantsView>,
    signup: BoardResult<SignupReceipt>,
    unregister: BoardResult<SignupReceipt>,
}

impl MockApi {
    pub fn new() -> Self {
        let not_found = BoardError::Status {
            status: 404,
            detail: Some("Activity not found".to_string()),
        };
        Self {
            calls: RefCell::new(Vec::new()),
            list: RefCell::new(Ok(ActivityMap::new())),
            participants: Err(not_found.clone()),
            signup: Err(not_found.clone()),
            unregister: Err(not_found),
        }
    }

    pub fn with_activities(self, activities: ActivityMap) -> Self {
        *self.list.borrow_mut() = Ok(activities);
        self
    }

    pub fn with_participants(mut self, response: BoardResult<ParticipantsView>) -> Self {
        self.participants = response;
        self
    }

    pub fn with_signup(mut self, response: BoardResult<SignupReceipt>) -> Self {
        self.signup = response;
        self
    }

    pub fn with_unregister(mut self, response: BoardResult<SignupReceipt>) -> Self {
        self.unregister = response;
        self
    }

    /// Make every following list request fail
    pub fn fail_list(&self, err: BoardError) {
        *self.list.borrow_mut() = Err(err);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for MockApi {
    async fn list_activities(&self, search: Option<&str>) -> BoardResult<ActivityMap> {
        self.calls
            .borrow_mut()
            .push(ApiCall::List(search.map(str::to_string)));
        self.list.borrow().clone()
    }

    async fn participants(&self, activity: &str) -> BoardResult<ParticipantsView> {
        self.calls
            .borrow_mut()
            .push(ApiCall::Participants(activity.to_string()));
        self.participants.clone()
    }

    async fn signup(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        self.calls.borrow_mut().push(ApiCall::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.signup.clone()
    }

    async fn unregister(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        self.calls.borrow_mut().push(ApiCall::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.unregister.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Board(BoardRender),
    Participants(ParticipantsPanel),
    Message(Message),
    Hidden,
    Submitting(bool),
    FormReset,
}

#[derive(Default)]
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn last_board(&self) -> Option<BoardRender> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            SurfaceEvent::Board(board) => Some(board.clone()),
            _ => None,
        })
    }

    pub fn last_message(&self) -> Option<Message> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            SurfaceEvent::Message(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn last_participants(&self) -> Option<ParticipantsPanel> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            SurfaceEvent::Participants(panel) => Some(panel.clone()),
            _ => None,
        })
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Surface for RecordingSurface {
    fn show_board(&self, board: &BoardRender) {
        self.push(SurfaceEvent::Board(board.clone()));
    }

    fn show_participants(&self, panel: &ParticipantsPanel) {
        self.push(SurfaceEvent::Participants(panel.clone()));
    }

    fn show_message(&self, message: &Message) {
        self.push(SurfaceEvent::Message(message.clone()));
    }

    fn hide_message(&self) {
        self.push(SurfaceEvent::Hidden);
    }

    fn set_submitting(&self, submitting: bool) {
        self.push(SurfaceEvent::Submitting(submitting));
    }

    fn reset_form(&self) {
        self.push(SurfaceEvent::FormReset);
    }
}
