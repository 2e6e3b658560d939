use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;
use crate::core::{AdapterError, NaturalSize};
use crate::video::backend::{BackendEvent, BackendStatus, PlayerBackend};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    Load(String),
    Play,
    Pause,
    Seek(u64),
    SetMuted(bool),
}

#[derive(Default)]
struct MockState {
    commands: Vec<MockCommand>,
    events: VecDeque<BackendEvent>,
    status: BackendStatus,
    media: Option<(u64, NaturalSize)>,
    fail_commands: bool,
    fail_status: bool,
}

/// Recording backend. Commands update the reported status but never push
/// callbacks on their own; tests deliver those explicitly.
pub struct MockBackend {
    state: Rc<RefCell<MockState>>,
}

/// Test-side view of a `MockBackend` that has been moved into an adapter.
#[derive(Clone)]
pub struct MockHandle {
    state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub fn with_media(duration_millis: u64, natural_size: NaturalSize) -> (Self, MockHandle) {
        let state = Rc::new(RefCell::new(MockState {
            media: Some((duration_millis, natural_size)),
            ..Default::default()
        }));
        (Self { state: state.clone() }, MockHandle { state })
    }

    fn record(&self, command: MockCommand) -> Result<(), AdapterError> {
        let mut state = self.state.borrow_mut();
        state.commands.push(command);
        if state.fail_commands {
            Err(AdapterError::Backend("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl PlayerBackend for MockBackend {
    async fn load(&mut self, uri: &str) -> Result<(), AdapterError> {
        self.record(MockCommand::Load(uri.to_string()))?;
        let mut state = self.state.borrow_mut();
        if let Some((duration_millis, natural_size)) = state.media {
            state.status.is_loaded = true;
            state.status.duration_millis = Some(duration_millis);
            state.events.push_back(BackendEvent::Loaded {
                duration_millis,
                natural_size: Some(natural_size),
            });
        }
        Ok(())
    }

    async fn play(&mut self) -> Result<(), AdapterError> {
        self.record(MockCommand::Play)?;
        self.state.borrow_mut().status.is_playing = true;
        Ok(())
    }

    async fn pause(&mut self) -> Result<(), AdapterError> {
        self.record(MockCommand::Pause)?;
        self.state.borrow_mut().status.is_playing = false;
        Ok(())
    }

    async fn seek(&mut self, position_millis: u64) -> Result<(), AdapterError> {
        self.record(MockCommand::Seek(position_millis))?;
        self.state.borrow_mut().status.position_millis = position_millis;
        Ok(())
    }

    async fn set_muted(&mut self, muted: bool) -> Result<(), AdapterError> {
        self.record(MockCommand::SetMuted(muted))?;
        self.state.borrow_mut().status.is_muted = muted;
        Ok(())
    }

    async fn status(&mut self) -> Result<BackendStatus, AdapterError> {
        let state = self.state.borrow();
        if state.fail_status {
            return Err(AdapterError::NotMounted);
        }
        Ok(state.status.clone())
    }

    fn poll_event(&mut self) -> Option<BackendEvent> {
        self.state.borrow_mut().events.pop_front()
    }
}

impl MockHandle {
    pub fn commands(&self) -> Vec<MockCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn seeks(&self) -> Vec<u64> {
        self.state.borrow().commands.iter()
            .filter_map(|command| match command {
                MockCommand::Seek(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &MockCommand) -> usize {
        self.state.borrow().commands.iter().filter(|command| *command == wanted).count()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    pub fn push_event(&self, event: BackendEvent) {
        self.state.borrow_mut().events.push_back(event);
    }

    /// Pushes a status callback that mirrors the current reported status.
    pub fn echo_status(&self) {
        let mut state = self.state.borrow_mut();
        let status = state.status.clone();
        state.events.push_back(BackendEvent::Status(status));
    }

    pub fn set_position(&self, position_millis: u64) {
        self.state.borrow_mut().status.position_millis = position_millis;
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().status.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.state.borrow().status.is_muted
    }

    pub fn fail_commands(&self, fail: bool) {
        self.state.borrow_mut().fail_commands = fail;
    }

    pub fn fail_status(&self, fail: bool) {
        self.state.borrow_mut().fail_status = fail;
    }
}
