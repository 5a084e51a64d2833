//! Scripted in-memory stand-ins shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::PortalApi;
use crate::context::{AuthContext, AuthState};
use crate::error::ApiError;
use crate::forms::{ProfileUpdate, SignInRequest, SignUpRequest};
use crate::token::{MemoryStore, StorageTokenStore};
use crate::user::{Role, TechnicalDivision, User};

pub type TestStore = StorageTokenStore<MemoryStore>;
pub type TestContext = AuthContext<Rc<RefCell<AuthState>>, TestStore, MockApi>;

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{name}@x.com").to_lowercase(),
        role: Role::Member,
        main_division: Some(TechnicalDivision::BackendDevelopment),
        managerial_division: None,
        available_times: Vec::new(),
    }
}

pub fn context(api: &MockApi) -> TestContext {
    AuthContext::new(Rc::default(), StorageTokenStore::new(MemoryStore::default()), api.clone())
}

#[derive(Default)]
struct Script {
    profiles: RefCell<HashMap<String, Result<User, ApiError>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    profile_calls: Cell<usize>,
    sign_in: RefCell<Option<Result<String, ApiError>>>,
    sign_up: RefCell<Option<Result<String, ApiError>>>,
    exchange: RefCell<Option<Result<String, ApiError>>>,
    exchanged_queries: RefCell<Vec<String>>,
    update: RefCell<Option<Result<User, ApiError>>>,
    updates: RefCell<Vec<(String, ProfileUpdate)>>,
}

/// Backend fake keyed by bearer token. Unscripted tokens answer 401.
#[derive(Clone, Default)]
pub struct MockApi {
    script: Rc<Script>,
}

impl MockApi {
    pub fn respond(&self, token: &str, reply: Result<User, ApiError>) {
        self.script.profiles.borrow_mut().insert(token.to_owned(), reply);
    }

    /// Hold the next profile request for `token` until the sender fires.
    pub fn gate(&self, token: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.gates.borrow_mut().insert(token.to_owned(), rx);
        tx
    }

    pub fn on_sign_in(&self, reply: Result<String, ApiError>) {
        *self.script.sign_in.borrow_mut() = Some(reply);
    }

    pub fn on_sign_up(&self, reply: Result<String, ApiError>) {
        *self.script.sign_up.borrow_mut() = Some(reply);
    }

    pub fn on_exchange(&self, reply: Result<String, ApiError>) {
        *self.script.exchange.borrow_mut() = Some(reply);
    }

    pub fn on_update(&self, reply: Result<User, ApiError>) {
        *self.script.update.borrow_mut() = Some(reply);
    }

    pub fn profile_calls(&self) -> usize {
        self.script.profile_calls.get()
    }

    pub fn exchanged_queries(&self) -> Vec<String> {
        self.script.exchanged_queries.borrow().clone()
    }

    pub fn updates(&self) -> Vec<(String, ProfileUpdate)> {
        self.script.updates.borrow().clone()
    }
}

fn scripted<T: Clone>(slot: &RefCell<Option<Result<T, ApiError>>>) -> Result<T, ApiError> {
    slot.borrow().clone().unwrap_or_else(|| Err(ApiError::Network("unscripted".to_owned())))
}

#[async_trait(?Send)]
impl PortalApi for MockApi {
    async fn sign_up(&self, _request: &SignUpRequest) -> Result<String, ApiError> {
        scripted(&self.script.sign_up)
    }

    async fn sign_in(&self, _request: &SignInRequest) -> Result<String, ApiError> {
        scripted(&self.script.sign_in)
    }

    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        self.script.profile_calls.set(self.script.profile_calls.get() + 1);
        let gate = self.script.gates.borrow_mut().remove(token);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.script
            .profiles
            .borrow()
            .get(token)
            .cloned()
            .unwrap_or(Err(ApiError::Unauthorized))
    }

    async fn exchange_oauth(&self, query: &str) -> Result<String, ApiError> {
        self.script.exchanged_queries.borrow_mut().push(query.to_owned());
        scripted(&self.script.exchange)
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.script.updates.borrow_mut().push((token.to_owned(), update.clone()));
        scripted(&self.script.update)
    }
}
